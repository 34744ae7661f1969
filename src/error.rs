//! Error types for densitext.
//!
//! This module defines the error types returned by extraction operations.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input has too few lines for the block-distribution window.
    ///
    /// The distribution needs strictly more lines than `block_width` to
    /// produce at least one sample. Empty input lands here too.
    #[error("not enough input lines for density analysis: {lines} line(s) with block width {block_width}")]
    InsufficientInput {
        /// Number of lines the sanitized input was split into.
        lines: usize,
        /// Configured window width the line count was checked against.
        block_width: usize,
    },

    /// No extractable content was found in the document.
    ///
    /// Sanitization removed everything; the density peak is zero.
    #[error("no extractable content found")]
    NoContent,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
