//! Error types for the post-processing engine.

use std::io;
use thiserror::Error;

/// Errors that can occur while post-processing a toolpath stream.
///
/// Absence of a recognizable shape is not an error; unmatched text passes
/// through unchanged. The variants here are the terminal stream-level
/// conditions.
#[derive(Error, Debug)]
pub enum PostProcessError {
    /// I/O failure on the input or output stream; fatal for the run.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input stream is not valid UTF-8 text.
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Result type alias for post-processing operations.
pub type Result<T> = std::result::Result<T, PostProcessError>;
