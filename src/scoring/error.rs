use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("embedding unavailable: {0}")]
    EmbeddingUnavailable(#[from] EmbeddingError),

    #[error("invalid vector: {reason}")]
    InvalidVector { reason: String },

    #[error("empty input: {what}")]
    EmptyInput { what: &'static str },

    #[error("top_n must be a positive integer")]
    InvalidTopN,
}
