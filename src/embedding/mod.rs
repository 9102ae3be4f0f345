//! Embedding backends.
//!
//! - [`Embedder`] is the contract the scorer is written against.
//! - [`sentence`] loads a BERT-family sentence-transformer with candle (or a
//!   deterministic lexical stub when no weights are configured).
//! - [`shared`] wraps the sentence embedder in a lazily loaded, shareable handle.

/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Hashed bag-of-words vectors used by the stub backends.
pub mod lexical;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
/// Sentence-transformer embedder.
pub mod sentence;
/// Lazily loaded shared embedder handle.
pub mod shared;
/// Tokenizer loading helpers.
pub mod utils;

pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
pub use sentence::{SentenceConfig, SentenceEmbedder};
pub use shared::SharedEmbedder;

use serde::{Deserialize, Serialize};

/// Backend that turns text into a fixed-length vector.
///
/// Vectors from different model configurations are not comparable.
pub trait Embedder: Send + Sync {
    /// Identifier of the model configuration producing the vectors.
    fn model_id(&self) -> &str;

    /// Length of every vector this backend produces.
    fn dimension(&self) -> usize;

    /// Whether produced vectors are L2-normalized.
    fn normalizes(&self) -> bool;

    /// Embeds a single text.
    fn embed(&self, text: &str) -> Result<EmbeddingVector, EmbeddingError>;

    /// Embeds several texts, preserving input order.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<EmbeddingVector>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }
}

/// Fixed-length embedding produced by an [`Embedder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbeddingVector(Vec<f32>);

impl EmbeddingVector {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f32 {
        self.0.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }
}

impl From<Vec<f32>> for EmbeddingVector {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}

impl AsRef<[f32]> for EmbeddingVector {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

/// Scales `values` to unit length in place. All-zero input is left untouched.
pub fn l2_normalize(values: &mut [f32]) {
    let norm: f32 = values.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in values.iter_mut() {
            *x /= norm;
        }
    }
}
