use std::path::PathBuf;

use crate::config::Config;
use crate::constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, DEFAULT_MODEL_ID};
use crate::embedding::error::EmbeddingError;

/// Model id reported by the lexical stub backend.
pub const STUB_MODEL_ID: &str = "lexical-stub";

/// Files a sentence-transformer directory must contain.
pub const REQUIRED_FILES: [&str; 3] = ["config.json", "model.safetensors", "tokenizer.json"];

#[derive(Debug, Clone)]
/// Configuration for [`SentenceEmbedder`](super::SentenceEmbedder).
pub struct SentenceConfig {
    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Identifier reported for vectors from this model.
    pub model_id: String,
    /// Max tokens to consider.
    pub max_seq_len: usize,
    /// Output embedding dimension.
    pub embedding_dim: usize,
    /// L2-normalize every produced vector.
    pub normalize: bool,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            normalize: true,
            testing_stub: false,
        }
    }
}

impl SentenceConfig {
    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Derives the embedder config from the application config.
    ///
    /// Without a `model_path` the embedder runs in stub mode.
    pub fn from_config(config: &Config) -> Self {
        let base = match config.model_path {
            Some(ref dir) => Self::new(dir.clone()),
            None => Self::stub(),
        };
        base.with_model_id(config.model_id.clone())
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be greater than zero".to_string(),
            });
        }

        if self.testing_stub {
            return Ok(());
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.model_dir.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: self.model_dir.clone(),
            });
        }

        Ok(())
    }

    /// Returns `true` if every required model file exists.
    pub fn model_available(&self) -> bool {
        self.missing_file().is_none()
    }

    /// First required file absent from `model_dir`, if any.
    pub fn missing_file(&self) -> Option<PathBuf> {
        if self.model_dir.as_os_str().is_empty() {
            return Some(self.model_dir.clone());
        }
        REQUIRED_FILES
            .iter()
            .map(|name| self.model_dir.join(name))
            .find(|path| !path.is_file())
    }

    /// Model id as reported by the embedder (stub mode reports [`STUB_MODEL_ID`]).
    pub fn model_label(&self) -> &str {
        if self.testing_stub {
            STUB_MODEL_ID
        } else {
            &self.model_id
        }
    }
}
