//! Relevance scoring: embed, compare, rank.
//!
//! [`RelevanceScorer`] is written against the [`Embedder`](crate::embedding::Embedder)
//! contract. It reduces every document to its relevant span with a
//! [`SectionExtractor`](crate::extract::SectionExtractor), embeds that span once,
//! and sorts by cosine similarity to the query.
//!
//! Any embedding failure aborts the whole ranking. A partial shortlist is never
//! returned.

pub mod deadline;
pub mod error;
pub mod scorer;
pub mod similarity;
pub mod types;

#[cfg(test)]
mod tests;

pub use deadline::rank_within;
pub use error::ScoringError;
pub use scorer::{RelevanceScorer, ScorerConfig};
pub use similarity::cosine_similarity;
pub use types::RankedCandidate;
