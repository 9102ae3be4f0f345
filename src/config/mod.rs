//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `SHORTLIST_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_MODEL_ID, DEFAULT_TOP_N, MIN_SECTION_CHARS};

/// Ranking configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SHORTLIST_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of candidates to keep per ranking call. Default: `5`.
    pub top_n: usize,

    /// Sentence-transformer directory (`config.json`, `model.safetensors`,
    /// `tokenizer.json`). `None` runs the embedder in stub mode.
    pub model_path: Option<PathBuf>,

    /// Identifier of the embedding model configuration.
    pub model_id: String,

    /// Minimum length of captured section text before falling back to full text.
    pub min_section_chars: usize,

    /// Optional deadline for a whole ranking call.
    pub rank_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            model_path: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            min_section_chars: MIN_SECTION_CHARS,
            rank_timeout: None,
        }
    }
}

impl Config {
    const ENV_TOP_N: &'static str = "SHORTLIST_TOP_N";
    const ENV_MODEL_PATH: &'static str = "SHORTLIST_MODEL_PATH";
    const ENV_MODEL_ID: &'static str = "SHORTLIST_MODEL_ID";
    const ENV_MIN_SECTION_CHARS: &'static str = "SHORTLIST_MIN_SECTION_CHARS";
    const ENV_RANK_TIMEOUT_SECS: &'static str = "SHORTLIST_RANK_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let top_n = Self::parse_top_n_from_env(defaults.top_n)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let model_id = Self::parse_string_from_env(Self::ENV_MODEL_ID, defaults.model_id);
        let min_section_chars =
            Self::parse_usize_from_env(Self::ENV_MIN_SECTION_CHARS, defaults.min_section_chars)?;
        let rank_timeout = Self::parse_optional_u64_from_env(Self::ENV_RANK_TIMEOUT_SECS)?
            .map(Duration::from_secs);

        Ok(Self {
            top_n,
            model_path,
            model_id,
            min_section_chars,
            rank_timeout,
        })
    }

    /// Validates paths and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::InvalidTopN {
                value: self.top_n.to_string(),
            });
        }

        if self.model_id.trim().is_empty() {
            return Err(ConfigError::EmptyModelId);
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    fn parse_top_n_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_TOP_N) {
            Ok(value) => {
                let top_n: usize = value.trim().parse().map_err(|e| ConfigError::ParseError {
                    var: Self::ENV_TOP_N,
                    value: value.clone(),
                    source: e,
                })?;

                if top_n == 0 {
                    return Err(ConfigError::InvalidTopN { value });
                }

                Ok(top_n)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_usize_from_env(var: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::ParseError { var, value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_u64_from_env(var: &'static str) -> Result<Option<u64>, ConfigError> {
        match env::var(var) {
            Ok(value) if value.trim().is_empty() => Ok(None),
            Ok(value) => value
                .trim()
                .parse()
                .map(Some)
                .map_err(|e| ConfigError::ParseError { var, value, source: e }),
            Err(_) => Ok(None),
        }
    }
}
