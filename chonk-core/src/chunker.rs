//! Fixed-size chunking over slices, iterables and text

use crate::error::{ChonkError, Result};
use crate::segmenter::{SegmentationMode, Segmenter};
use tracing::trace;

/// Splits ordered input into consecutive chunks of a fixed maximum size
///
/// Every chunk holds exactly `size` elements except possibly the last, which
/// holds between 1 and `size`. Concatenating the chunks in order reproduces
/// the input exactly; empty input produces zero chunks. Inputs are never
/// mutated and every chunk is newly allocated.
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    size: usize,
}

impl Chunker {
    /// Create a chunker producing chunks of at most `size` elements.
    ///
    /// Fails with [`ChonkError::InvalidArgument`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(ChonkError::InvalidArgument(
                "chunk size must be at least 1".to_string(),
            ));
        }
        Ok(Self { size })
    }

    /// Maximum number of elements per chunk
    pub fn size(&self) -> usize {
        self.size
    }

    /// Chunk a slice of cloneable elements
    pub fn chunk_slice<T: Clone>(&self, items: &[T]) -> Vec<Vec<T>> {
        trace!(size = self.size, len = items.len(), "chunking slice");
        items.chunks(self.size).map(<[T]>::to_vec).collect()
    }

    /// Chunk a byte buffer; chunks stay byte buffers
    pub fn chunk_bytes(&self, bytes: &[u8]) -> Vec<Vec<u8>> {
        self.chunk_slice(bytes)
    }

    /// Materialize any iterable and chunk it in iteration order.
    ///
    /// Covers vectors, sets, ranges and other forward-iterable containers.
    /// For maps, pass the view to batch explicitly (`map.into_values()` for
    /// values, the map itself for key/value pairs).
    pub fn chunk_iter<I>(&self, items: I) -> Vec<Vec<I::Item>>
    where
        I: IntoIterator,
    {
        let items = items.into_iter();
        // Preallocation is capped by the iterator's lower bound: a chunk
        // size far beyond the input length (e.g. usize::MAX as a "no limit"
        // sentinel) must yield one chunk, not overflow the allocator.
        let capacity = self.size.min(items.size_hint().0);
        let mut chunks = Vec::new();
        let mut buffer = Vec::with_capacity(capacity);
        for item in items {
            buffer.push(item);
            if buffer.len() == self.size {
                chunks.push(std::mem::replace(
                    &mut buffer,
                    Vec::with_capacity(capacity),
                ));
            }
        }
        if !buffer.is_empty() {
            chunks.push(buffer);
        }
        trace!(size = self.size, chunks = chunks.len(), "chunked iterable");
        chunks
    }

    /// Chunk text counting Unicode scalar values.
    ///
    /// Not grapheme-safe: a chunk boundary can fall inside a combining
    /// sequence or a ZWJ-joined emoji. Use
    /// [`chunk_segments`](Self::chunk_segments) with a grapheme segmenter
    /// when user-perceived characters must stay whole. The two semantics are
    /// intentionally distinct.
    pub fn chunk_text(&self, text: &str) -> Vec<String> {
        let segmenter = Segmenter::new(SegmentationMode::CodePoints);
        self.join_strides(&segmenter.segment(text))
    }

    /// Chunk text so every chunk is a concatenation of whole segments.
    ///
    /// With the default (grapheme cluster) segmenter no chunk ever ends
    /// mid-cluster.
    pub fn chunk_segments(&self, text: &str, segmenter: &Segmenter) -> Vec<String> {
        trace!(mode = ?segmenter.mode(), size = self.size, "chunking text");
        self.join_strides(&segmenter.segment(text))
    }

    /// Stride over segmented elements, re-joining each stride into one chunk
    fn join_strides(&self, elements: &[&str]) -> Vec<String> {
        elements
            .chunks(self.size)
            .map(|stride| stride.concat())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size() {
        assert!(matches!(
            Chunker::new(0),
            Err(ChonkError::InvalidArgument(_))
        ));
    }

    #[test]
    fn last_chunk_carries_remainder() {
        let chunker = Chunker::new(2).unwrap();
        assert_eq!(
            chunker.chunk_slice(&[1, 2, 3, 4, 5]),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        let chunker = Chunker::new(3).unwrap();
        assert!(chunker.chunk_slice::<i32>(&[]).is_empty());
        assert!(chunker.chunk_text("").is_empty());
        assert!(chunker.chunk_iter(Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn text_chunking_counts_code_points_not_bytes() {
        let chunker = Chunker::new(2).unwrap();
        assert_eq!(chunker.chunk_text("héllo"), vec!["hé", "ll", "o"]);
    }
}
