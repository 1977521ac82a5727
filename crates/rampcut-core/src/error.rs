//! Error types for the core crate.

use thiserror::Error;

/// Errors produced by core parameter validation.
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration value is out of its valid domain.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
