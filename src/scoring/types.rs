use serde::Serialize;

use crate::document::CandidateDocument;

/// One document's place in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub identifier: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Cosine similarity to the query, in `[-1.0, 1.0]`.
    pub score: f32,
    /// Position of the document in the slice passed to `rank`.
    pub input_index: usize,
}

impl RankedCandidate {
    pub fn new(document: &CandidateDocument, score: f32, input_index: usize) -> Self {
        Self {
            identifier: document.identifier().to_string(),
            display_name: document.display_name().to_string(),
            contact_email: document.contact_email().map(str::to_string),
            score,
            input_index,
        }
    }
}
