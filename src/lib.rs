//! Shortlist library crate (used by the CLI and integration tests).
//!
//! Ranks candidate documents (resume text) against a free-text query, such as
//! a job description, by embedding similarity.
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`HeadingExtractor`], [`extract_relevant`] - Reduce a document to its relevant sections
//! - [`RelevanceScorer`] - Embed, compare and rank
//! - [`rank_within`] - Deadline-bounded ranking on the blocking pool
//!
//! ## Embedding
//! - [`Embedder`] - Backend contract
//! - [`SentenceEmbedder`], [`SentenceConfig`] - candle BERT sentence embedder (or lexical stub)
//! - [`SharedEmbedder`] - Lazily loaded, shareable model handle
//!
//! ## Data
//! - [`CandidateDocument`], [`RankedCandidate`]
//! - [`profile`] helpers for display names and contact emails
//!
//! ## Test/Mock Support
//! [`embedding::MockEmbedder`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod document;
pub mod embedding;
pub mod extract;
pub mod profile;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, DEFAULT_MODEL_ID, DEFAULT_TOP_N,
    DimValidationError, MIN_SECTION_CHARS, validate_embedding_dim,
};
pub use document::CandidateDocument;
pub use embedding::{
    Embedder, EmbeddingError, EmbeddingVector, SentenceConfig, SentenceEmbedder, SharedEmbedder,
};
pub use extract::{FullTextExtractor, HeadingExtractor, SectionExtractor, extract_relevant};
pub use scoring::{
    RankedCandidate, RelevanceScorer, ScorerConfig, ScoringError, cosine_similarity, rank_within,
};
