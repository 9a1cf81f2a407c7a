//! Error contract shared by every chunking entry point

use thiserror::Error;

/// Errors raised by chunking operations
///
/// Both kinds are raised before any chunk is produced; there is no
/// partial-result mode.
#[derive(Debug, Error)]
pub enum ChonkError {
    /// Missing input, or a chunk size that is not a positive number
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input is a value that cannot be treated as an ordered sequence
    #[error("unsupported input type: {0}")]
    UnsupportedType(String),
}

/// Result type for chunking operations
pub type Result<T> = std::result::Result<T, ChonkError>;
