//! Candidate documents as supplied by ingestion.

use serde::{Deserialize, Serialize};

use crate::profile;

/// One ingested document to be ranked.
///
/// Immutable once built. Scores are not stored here: every ranking call
/// produces fresh [`RankedCandidate`](crate::scoring::RankedCandidate) values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDocument {
    identifier: String,
    raw_text: String,
    display_name: String,
    contact_email: Option<String>,
}

impl CandidateDocument {
    /// Builds a document, deriving the display name and contact email from
    /// `identifier` and `raw_text`.
    pub fn new(identifier: impl Into<String>, raw_text: impl Into<String>) -> Self {
        let identifier = identifier.into();
        let raw_text = raw_text.into();
        let display_name = profile::display_name(&identifier, &raw_text);
        let contact_email = profile::extract_email(&raw_text).map(str::to_string);

        Self {
            identifier,
            raw_text,
            display_name,
            contact_email,
        }
    }

    /// Overrides the derived display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn contact_email(&self) -> Option<&str> {
        self.contact_email.as_deref()
    }
}

impl<I: Into<String>, T: Into<String>> From<(I, T)> for CandidateDocument {
    fn from((identifier, raw_text): (I, T)) -> Self {
        Self::new(identifier, raw_text)
    }
}
