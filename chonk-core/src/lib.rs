//! Fixed-size chunking for ordered collections, with grapheme-cluster-aware
//! chunking for text.
//!
//! Two composable pieces sit on one slicing primitive: [`Chunker`] strides
//! any ordered input in fixed steps, and [`Segmenter`] turns text into the
//! atomic elements the stride walks over. The grapheme path composes the
//! two so a chunk never ends in the middle of a user-perceived character
//! (joined emoji, flag sequences, combining marks).
//!
//! ```
//! let chunks = chonk_core::chunk([1, 2, 3, 4], 2)?;
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4]]);
//!
//! let chunks = chonk_core::chunk_graphemes("👨‍👩‍👧‍👦👩‍💻🏳️‍🌈", 1)?;
//! assert_eq!(chunks, vec!["👨‍👩‍👧‍👦", "👩‍💻", "🏳️‍🌈"]);
//! # Ok::<(), chonk_core::ChonkError>(())
//! ```
//!
//! All operations are pure and synchronous: no shared state, no I/O, inputs
//! are never mutated. For batching asynchronous sources see the
//! `chonk-stream` crate.

#![warn(missing_docs)]

pub mod chunker;
pub mod error;
pub mod segmenter;
#[cfg(feature = "json")]
pub mod value;

// Re-export key types
pub use chunker::Chunker;
pub use error::{ChonkError, Result};
pub use segmenter::{SegmentationMode, Segmenter};
#[cfg(feature = "json")]
pub use value::{chunk_value, chunk_value_graphemes};

// Convenience functions

/// Chunk any iterable into vectors of at most `size` elements, in iteration
/// order.
pub fn chunk<I: IntoIterator>(items: I, size: usize) -> Result<Vec<Vec<I::Item>>> {
    Ok(Chunker::new(size)?.chunk_iter(items))
}

/// Chunk text counting Unicode scalar values.
///
/// Not grapheme-safe; see [`chunk_graphemes`] for text where user-perceived
/// characters must stay whole.
pub fn chunk_text(text: &str, size: usize) -> Result<Vec<String>> {
    Ok(Chunker::new(size)?.chunk_text(text))
}

/// Chunk text by grapheme clusters: no chunk ever splits a user-perceived
/// character.
pub fn chunk_graphemes(text: &str, size: usize) -> Result<Vec<String>> {
    Ok(Chunker::new(size)?.chunk_segments(text, &Segmenter::default()))
}
