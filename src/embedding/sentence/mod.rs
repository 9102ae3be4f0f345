//! Sentence-transformer embedder (BERT-family safetensors + tokenizer).
//!
//! Use [`SentenceConfig::stub`] for tests and demos without model files.

/// Sentence embedder configuration.
pub mod config;
pub(crate) mod model;


pub use config::{REQUIRED_FILES, STUB_MODEL_ID, SentenceConfig};

use candle_core::{Device, Tensor};
use tracing::{debug, info, warn};

use crate::constants::validate_embedding_dim;
use crate::embedding::device::select_device;
use crate::embedding::error::EmbeddingError;
use crate::embedding::lexical::lexical_embedding;
use crate::embedding::utils::load_tokenizer_with_truncation;
use crate::embedding::{Embedder, EmbeddingVector, l2_normalize};

use model::SentenceModel;

enum EmbedderBackend {
    Model {
        model: SentenceModel,
        tokenizer: tokenizers::Tokenizer,
        device: Device,
    },
    Stub {
        device: Device,
    },
}

/// Sentence embedder with mean pooling (supports stub mode).
pub struct SentenceEmbedder {
    backend: EmbedderBackend,
    config: SentenceConfig,
}

impl std::fmt::Debug for SentenceEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EmbedderBackend::Stub { device } => format!("Stub({:?})", device),
                },
            )
            .field("model_id", &self.config.model_label())
            .field("embedding_dim", &self.config.embedding_dim)
            .field("normalize", &self.config.normalize)
            .finish()
    }
}

impl SentenceEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    pub fn load(config: SentenceConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let device = select_device()?;
        debug!(?device, "Selected compute device for sentence embedder");

        if config.testing_stub {
            warn!("Sentence embedder running in STUB mode (lexical vectors)");
            return Ok(Self {
                backend: EmbedderBackend::Stub { device },
                config,
            });
        }

        if let Some(path) = config.missing_file() {
            return Err(EmbeddingError::ModelNotFound { path });
        }

        let model = SentenceModel::load(&config.model_dir, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {e}"),
            }
        })?;

        validate_embedding_dim(model.hidden_size(), config.embedding_dim).map_err(|e| {
            EmbeddingError::InvalidConfig {
                reason: e.to_string(),
            }
        })?;

        let tokenizer = load_tokenizer_with_truncation(&config.model_dir, config.max_seq_len)
            .map_err(|e| EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {e}"),
            })?;

        info!(
            model_dir = %config.model_dir.display(),
            model_id = %config.model_id,
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            "Sentence model loaded"
        );

        Ok(Self {
            backend: EmbedderBackend::Model {
                model,
                tokenizer,
                device,
            },
            config,
        })
    }

    fn embed_with_model(
        &self,
        text: &str,
        model: &SentenceModel,
        tokenizer: &tokenizers::Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let ids = encoding.get_ids();
        if ids.is_empty() {
            return Ok(vec![0.0; self.config.embedding_dim]);
        }

        debug!(
            text_len = text.len(),
            token_count = ids.len(),
            "Generating embedding (transformer forward pass)"
        );

        // [1, seq_len]
        let input_ids = Tensor::new(ids, device)?.unsqueeze(0)?;
        let token_type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        let pooled = model
            .encode(&input_ids, &token_type_ids, &attention_mask)
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Transformer forward pass failed: {e}"),
            })?;

        Ok(pooled.squeeze(0)?.to_vec1::<f32>()?)
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        debug!(text_len = text.len(), "Generating stub embedding");
        lexical_embedding(text, self.config.embedding_dim)
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub { .. })
    }

    /// Returns `true` if a model is loaded.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Model { .. })
    }

    /// Returns the embedder configuration.
    pub fn config(&self) -> &SentenceConfig {
        &self.config
    }
}

impl Embedder for SentenceEmbedder {
    fn model_id(&self) -> &str {
        self.config.model_label()
    }

    fn dimension(&self) -> usize {
        self.config.embedding_dim
    }

    fn normalizes(&self) -> bool {
        self.config.normalize
    }

    fn embed(&self, text: &str) -> Result<EmbeddingVector, EmbeddingError> {
        if text.trim().is_empty() {
            return Ok(EmbeddingVector::new(vec![0.0; self.config.embedding_dim]));
        }

        let mut values = match &self.backend {
            EmbedderBackend::Model {
                model,
                tokenizer,
                device,
            } => self.embed_with_model(text, model, tokenizer, device)?,
            EmbedderBackend::Stub { .. } => self.embed_stub(text),
        };

        if self.config.normalize {
            l2_normalize(&mut values);
        }
        Ok(EmbeddingVector::new(values))
    }
}
