//! Configurable in-memory embedder for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::lexical::lexical_embedding;
use super::{Embedder, EmbeddingError, EmbeddingVector, l2_normalize};

/// Model id reported by [`MockEmbedder`].
pub const MOCK_MODEL_ID: &str = "mock";

#[derive(Debug, Clone)]
enum MockMode {
    Lexical,
    Constant(Vec<f32>),
}

/// Embedder with scripted behavior.
///
/// Produces lexical or constant vectors, per-text overrides, an optional
/// failure after a number of calls, and an optional artificial delay.
#[derive(Debug)]
pub struct MockEmbedder {
    dim: usize,
    mode: MockMode,
    overrides: HashMap<String, Vec<f32>>,
    fail_after: Option<usize>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockEmbedder {
    /// Normalized hashed bag-of-words vectors of length `dim`.
    pub fn lexical(dim: usize) -> Self {
        Self::with_mode(dim, MockMode::Lexical)
    }

    /// Returns `vector` for every text.
    pub fn constant(vector: Vec<f32>) -> Self {
        Self::with_mode(vector.len(), MockMode::Constant(vector))
    }

    fn with_mode(dim: usize, mode: MockMode) -> Self {
        Self {
            dim,
            mode,
            overrides: HashMap::new(),
            fail_after: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns `vector` (as given) whenever `text` is embedded.
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.overrides.insert(text.into(), vector);
        self
    }

    /// Fails with `InferenceFailed` once more than `n` calls have been made.
    pub fn failing_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    /// Sleeps for `delay` on every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `embed` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Embedder for MockEmbedder {
    fn model_id(&self) -> &str {
        MOCK_MODEL_ID
    }

    fn dimension(&self) -> usize {
        self.dim
    }

    fn normalizes(&self) -> bool {
        matches!(self.mode, MockMode::Lexical)
    }

    fn embed(&self, text: &str) -> Result<EmbeddingVector, EmbeddingError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }

        if let Some(limit) = self.fail_after
            && call > limit
        {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("mock failure on call {call}"),
            });
        }

        if let Some(vector) = self.overrides.get(text) {
            return Ok(EmbeddingVector::new(vector.clone()));
        }

        let values = match &self.mode {
            MockMode::Lexical => {
                let mut values = lexical_embedding(text, self.dim);
                l2_normalize(&mut values);
                values
            }
            MockMode::Constant(vector) => vector.clone(),
        };
        Ok(EmbeddingVector::new(values))
    }
}
