use std::borrow::Cow;
use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Config;
use crate::constants::DEFAULT_TOP_N;
use crate::document::CandidateDocument;
use crate::embedding::{Embedder, EmbeddingVector};
use crate::extract::{HeadingExtractor, SectionExtractor};

use super::error::ScoringError;
use super::similarity::cosine_similarity;
use super::types::RankedCandidate;

/// Tunables for [`RelevanceScorer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorerConfig {
    /// Result count used by [`RelevanceScorer::shortlist`].
    pub top_n: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl From<&Config> for ScorerConfig {
    fn from(config: &Config) -> Self {
        Self {
            top_n: config.top_n,
        }
    }
}

/// Ranks candidate documents against a query by embedding similarity.
///
/// Each document is reduced to its relevant span by the extractor, then
/// embedded once. The query is embedded once per call.
#[derive(Clone)]
pub struct RelevanceScorer {
    embedder: Arc<dyn Embedder>,
    extractor: Arc<dyn SectionExtractor>,
    config: ScorerConfig,
}

impl std::fmt::Debug for RelevanceScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelevanceScorer")
            .field("model_id", &self.embedder.model_id())
            .field("dimension", &self.embedder.dimension())
            .field("config", &self.config)
            .finish()
    }
}

impl RelevanceScorer {
    /// Uses a [`HeadingExtractor`] with the default threshold.
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self {
            embedder,
            extractor: Arc::new(HeadingExtractor::new()),
            config: ScorerConfig::default(),
        }
    }

    /// Builds a scorer from the application config.
    pub fn from_config(embedder: Arc<dyn Embedder>, config: &Config) -> Self {
        Self::new(embedder)
            .with_extractor(Arc::new(HeadingExtractor::with_min_chars(
                config.min_section_chars,
            )))
            .with_config(ScorerConfig::from(config))
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn SectionExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_config(mut self, config: ScorerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> ScorerConfig {
        self.config
    }

    pub fn embedder(&self) -> &Arc<dyn Embedder> {
        &self.embedder
    }

    /// Embeds `text`, checking the vector has the backend's declared length.
    pub fn embed(&self, text: &str) -> Result<EmbeddingVector, ScoringError> {
        let vector = self.embedder.embed(text)?;
        self.check_dimension(vector)
    }

    fn check_dimension(&self, vector: EmbeddingVector) -> Result<EmbeddingVector, ScoringError> {
        let expected = self.embedder.dimension();
        if vector.len() != expected {
            return Err(ScoringError::InvalidVector {
                reason: format!(
                    "backend declared dimension {expected}, produced {}",
                    vector.len()
                ),
            });
        }
        Ok(vector)
    }

    pub fn similarity(
        &self,
        a: &EmbeddingVector,
        b: &EmbeddingVector,
    ) -> Result<f32, ScoringError> {
        cosine_similarity(a.as_slice(), b.as_slice())
    }

    /// Embeds the relevant span of every document, in input order.
    ///
    /// Sequential builds hand all spans to [`Embedder::embed_batch`] in one
    /// call; with `parallel` each span is embedded on the rayon pool. The
    /// first failure aborts the whole batch.
    pub fn embed_documents(
        &self,
        documents: &[CandidateDocument],
    ) -> Result<Vec<EmbeddingVector>, ScoringError> {
        #[cfg(feature = "parallel")]
        let vectors: Result<Vec<_>, ScoringError> = {
            use rayon::prelude::*;
            documents
                .par_iter()
                .map(|doc| self.embed(&self.relevant_span(doc)))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let vectors: Result<Vec<_>, ScoringError> = {
            let spans: Vec<Cow<'_, str>> =
                documents.iter().map(|doc| self.relevant_span(doc)).collect();
            let texts: Vec<&str> = spans.iter().map(|span| span.as_ref()).collect();
            let batch = self.embedder.embed_batch(&texts)?;
            if batch.len() != texts.len() {
                return Err(ScoringError::InvalidVector {
                    reason: format!(
                        "batch of {} texts produced {} vectors",
                        texts.len(),
                        batch.len()
                    ),
                });
            }
            batch
                .into_iter()
                .map(|vector| self.check_dimension(vector))
                .collect()
        };

        vectors
    }

    fn relevant_span<'a>(&self, document: &'a CandidateDocument) -> Cow<'a, str> {
        let span = self.extractor.extract_relevant(document.raw_text());
        debug!(
            identifier = document.identifier(),
            raw_len = document.raw_text().len(),
            span_len = span.len(),
            "Extracted document span"
        );
        span
    }

    /// Ranks `documents` by similarity to `query`, best first.
    ///
    /// Returns at most `top_n` candidates. Equal scores keep their input order.
    /// An empty document slice yields an empty ranking.
    pub fn rank(
        &self,
        query: &str,
        documents: &[CandidateDocument],
        top_n: usize,
    ) -> Result<Vec<RankedCandidate>, ScoringError> {
        if query.trim().is_empty() {
            return Err(ScoringError::EmptyInput { what: "query" });
        }

        if top_n == 0 {
            return Err(ScoringError::InvalidTopN);
        }

        if documents.is_empty() {
            debug!("No documents provided for ranking");
            return Ok(vec![]);
        }

        debug!(
            query_len = query.len(),
            num_documents = documents.len(),
            top_n,
            "Starting ranking"
        );

        let query_vector = self.embed(query)?;
        let document_vectors = self.embed_documents(documents)?;

        let mut ranked = documents
            .iter()
            .zip(document_vectors.iter())
            .enumerate()
            .map(|(index, (doc, vector))| {
                let score = self.similarity(&query_vector, vector)?;
                Ok(RankedCandidate::new(doc, score, index))
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(top_n);

        if let Some(top) = ranked.first() {
            info!(
                num_documents = documents.len(),
                returned = ranked.len(),
                top_identifier = %top.identifier,
                top_score = top.score,
                "Ranking complete"
            );
        }

        Ok(ranked)
    }

    /// [`rank`](Self::rank) with the configured `top_n`.
    pub fn shortlist(
        &self,
        query: &str,
        documents: &[CandidateDocument],
    ) -> Result<Vec<RankedCandidate>, ScoringError> {
        self.rank(query, documents, self.config.top_n)
    }
}
