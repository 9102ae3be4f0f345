use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use super::{Embedder, EmbeddingError, EmbeddingVector, SentenceConfig, SentenceEmbedder};

struct SharedInner {
    config: SentenceConfig,
    slot: RwLock<Option<Arc<SentenceEmbedder>>>,
}

/// Shareable handle to a lazily loaded [`SentenceEmbedder`].
///
/// Clones share one model. The first caller to need it loads it; concurrent
/// first calls still load exactly one instance. A failed load is not
/// remembered, so the next call tries again.
#[derive(Clone)]
pub struct SharedEmbedder {
    inner: Arc<SharedInner>,
}

impl std::fmt::Debug for SharedEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedEmbedder")
            .field("model_id", &self.inner.config.model_label())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl SharedEmbedder {
    pub fn new(config: SentenceConfig) -> Self {
        Self {
            inner: Arc::new(SharedInner {
                config,
                slot: RwLock::new(None),
            }),
        }
    }

    /// Returns the loaded embedder, loading it on first use.
    pub fn get(&self) -> Result<Arc<SentenceEmbedder>, EmbeddingError> {
        if let Some(embedder) = self.inner.slot.read().as_ref() {
            return Ok(Arc::clone(embedder));
        }

        let mut slot = self.inner.slot.write();
        if let Some(embedder) = slot.as_ref() {
            debug!("Embedder loaded by a concurrent caller");
            return Ok(Arc::clone(embedder));
        }

        info!(model_id = %self.inner.config.model_label(), "Loading shared embedder");
        let embedder = Arc::new(SentenceEmbedder::load(self.inner.config.clone())?);
        *slot = Some(Arc::clone(&embedder));
        Ok(embedder)
    }

    /// Returns `true` once a load has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.inner.slot.read().is_some()
    }

    pub fn config(&self) -> &SentenceConfig {
        &self.inner.config
    }
}

impl Embedder for SharedEmbedder {
    fn model_id(&self) -> &str {
        self.inner.config.model_label()
    }

    fn dimension(&self) -> usize {
        self.inner.config.embedding_dim
    }

    fn normalizes(&self) -> bool {
        self.inner.config.normalize
    }

    fn embed(&self, text: &str) -> Result<EmbeddingVector, EmbeddingError> {
        self.get()?.embed(text)
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<EmbeddingVector>, EmbeddingError> {
        self.get()?.embed_batch(texts)
    }
}
