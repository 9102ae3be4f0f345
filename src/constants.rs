//! Cross-cutting, shared constants.
//!
//! The embedding dimension is a property of the model configuration: two vectors
//! are only comparable when they come from the same model. Use
//! [`validate_embedding_dim`] wherever a loaded model meets a configured size.

use thiserror::Error;

/// Default number of candidates returned by a ranking call.
pub const DEFAULT_TOP_N: usize = 5;

/// Captured section text shorter than this falls back to the full document.
pub const MIN_SECTION_CHARS: usize = 50;

/// Documents shorter than `MIN_SECTION_CHARS * SHORT_DOCUMENT_DIVISOR` scale the
/// fallback threshold down to a fraction of their own length.
pub const SHORT_DOCUMENT_DIVISOR: usize = 3;

/// Output size of `all-MiniLM-L6-v2`.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Token budget per embedded text.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Sentence-transformer used when no other model id is configured.
pub const DEFAULT_MODEL_ID: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Error returned when dimension validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimValidationError {
    /// Embedding dimension cannot be zero.
    #[error("embedding dimension cannot be zero")]
    ZeroDimension,
    /// Runtime dimension does not match expected dimension.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Validates that a runtime embedding dimension matches the expected dimension.
///
/// # Example
///
/// ```
/// use shortlist::constants::{validate_embedding_dim, DEFAULT_EMBEDDING_DIM};
///
/// validate_embedding_dim(384, DEFAULT_EMBEDDING_DIM).unwrap();
/// assert!(validate_embedding_dim(768, DEFAULT_EMBEDDING_DIM).is_err());
/// ```
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if expected == 0 || actual == 0 {
        return Err(DimValidationError::ZeroDimension);
    }
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
