use std::time::Duration;

use tokio::time::timeout;
use tracing::warn;

use crate::document::CandidateDocument;
use crate::embedding::EmbeddingError;

use super::error::ScoringError;
use super::scorer::RelevanceScorer;
use super::types::RankedCandidate;

/// Runs [`RelevanceScorer::rank`] on the blocking pool under `deadline`.
///
/// An elapsed deadline aborts the batch with
/// `EmbeddingUnavailable(DeadlineExceeded)`. The blocking task is left to
/// finish in the background; its result is discarded.
pub async fn rank_within(
    scorer: &RelevanceScorer,
    query: &str,
    documents: &[CandidateDocument],
    top_n: usize,
    deadline: Duration,
) -> Result<Vec<RankedCandidate>, ScoringError> {
    let scorer = scorer.clone();
    let query = query.to_string();
    let documents = documents.to_vec();

    let task = tokio::task::spawn_blocking(move || scorer.rank(&query, &documents, top_n));

    match timeout(deadline, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => Err(ScoringError::EmbeddingUnavailable(
            EmbeddingError::InferenceFailed {
                reason: format!("ranking task failed: {join_err}"),
            },
        )),
        Err(_) => {
            warn!(?deadline, "Ranking exceeded deadline");
            Err(ScoringError::EmbeddingUnavailable(
                EmbeddingError::DeadlineExceeded { deadline },
            ))
        }
    }
}
