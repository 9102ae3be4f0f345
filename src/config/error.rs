//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `top_n` must be a positive integer.
    #[error("invalid top_n '{value}': must be at least 1")]
    InvalidTopN { value: String },

    /// A numeric variable could not be parsed.
    #[error("failed to parse {var}='{value}': {source}")]
    ParseError {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("model id cannot be empty")]
    EmptyModelId,

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
