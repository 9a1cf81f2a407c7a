//! Asynchronous batching of streamed items into fixed-size chunks
//!
//! [`chunk_stream`] is a buffering adapter over any [`Stream`]: items are
//! pulled one at a time in arrival order and re-emitted as `Vec` batches of
//! at most `size` elements, with the remainder flushed when the source ends.
//! Size validation shares the contract of `chonk-core`'s [`Chunker`].

#![warn(missing_docs)]

use async_stream::stream;
use chonk_core::Chunker;
use futures_core::Stream;
use futures_util::{pin_mut, StreamExt};
use tracing::trace;

// Re-export the shared error contract
pub use chonk_core::{ChonkError, Result};

/// Re-emit items from `source` as batches of at most `size` items.
///
/// Every batch holds exactly `size` items except possibly the last, which
/// holds the remainder once the source is exhausted. An immediately
/// exhausted source yields zero batches. Fails with
/// [`chonk_core::ChonkError::InvalidArgument`] when `size` is zero, before
/// the source is touched.
///
/// The returned stream is lazy: nothing is pulled from the source until it
/// is polled. It is single-consumer; dropping it abandons the source, and a
/// partial buffer that never reached `size` is discarded with it. Callers
/// compose their own timeout or cancellation around the source.
pub fn chunk_stream<S>(source: S, size: usize) -> Result<impl Stream<Item = Vec<S::Item>>>
where
    S: Stream,
{
    let size = Chunker::new(size)?.size();
    Ok(stream! {
        pin_mut!(source);
        // Cap preallocation by the source's lower bound; an oversized batch
        // size must yield one short batch, not overflow the allocator.
        let capacity = size.min(source.size_hint().0);
        let mut buffer = Vec::with_capacity(capacity);
        while let Some(item) = source.next().await {
            buffer.push(item);
            if buffer.len() == size {
                trace!(len = size, "emitting full batch");
                yield std::mem::replace(&mut buffer, Vec::with_capacity(capacity));
            }
        }
        if !buffer.is_empty() {
            trace!(len = buffer.len(), "flushing final batch");
            yield buffer;
        }
    })
}
