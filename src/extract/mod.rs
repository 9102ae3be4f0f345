//! Section extraction.
//!
//! Reduces a resume to the text under skills/experience/project style headings
//! before it is embedded. The heading heuristic lives in [`patterns`] and sits
//! behind the [`SectionExtractor`] trait so it can be replaced without touching
//! the scorer.
//!
//! Extraction never fails. When nothing qualifying is captured the original text
//! is returned unchanged.

pub mod patterns;


use std::borrow::Cow;

use tracing::debug;

use crate::constants::{MIN_SECTION_CHARS, SHORT_DOCUMENT_DIVISOR};

/// Reduces raw document text to the span worth embedding.
pub trait SectionExtractor: Send + Sync {
    /// Returns the relevant span of `text`, or `text` itself as a fallback.
    fn extract_relevant<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Heading-driven extractor.
///
/// A relevant heading starts a capture; any other heading-shaped line ends it.
/// Blank lines inside a capture are kept as separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingExtractor {
    min_chars: usize,
}

impl Default for HeadingExtractor {
    fn default() -> Self {
        Self {
            min_chars: MIN_SECTION_CHARS,
        }
    }
}

impl HeadingExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum captured length below which the full text is used.
    pub fn with_min_chars(min_chars: usize) -> Self {
        Self { min_chars }
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Captured length required for `text` to keep its extracted sections.
    ///
    /// Short documents cannot produce `min_chars` of sections, so the bar drops
    /// to a fraction of the document's own length.
    pub fn signal_threshold(&self, text: &str) -> usize {
        let doc_chars = text.trim().chars().count();
        self.min_chars.min(doc_chars / SHORT_DOCUMENT_DIVISOR)
    }

    /// Concatenates every captured section, trimmed. Empty when nothing matched.
    pub fn capture_sections(&self, text: &str) -> String {
        let mut captured: Vec<&str> = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut capturing = false;

        for line in text.lines().map(str::trim) {
            if line.is_empty() {
                if capturing {
                    current.push("");
                }
                continue;
            }

            if patterns::is_relevant_heading(line) {
                captured.append(&mut current);
                current.push(line);
                capturing = true;
            } else if capturing && patterns::looks_like_heading(line) {
                captured.append(&mut current);
                capturing = false;
            } else if capturing {
                current.push(line);
            }
        }
        captured.append(&mut current);

        captured.join("\n").trim().to_string()
    }
}

impl SectionExtractor for HeadingExtractor {
    fn extract_relevant<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let captured = self.capture_sections(text);
        let threshold = self.signal_threshold(text);
        let captured_chars = captured.chars().count();

        if captured.is_empty() || captured_chars < threshold {
            debug!(
                text_len = text.len(),
                captured_chars,
                threshold,
                "No usable sections found, using full text"
            );
            return Cow::Borrowed(text);
        }

        debug!(
            text_len = text.len(),
            captured_chars, "Extracted relevant sections"
        );
        Cow::Owned(captured)
    }
}

/// Pass-through extractor that embeds whole documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullTextExtractor;

impl SectionExtractor for FullTextExtractor {
    fn extract_relevant<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// Extracts relevant sections with the default [`HeadingExtractor`].
pub fn extract_relevant(text: &str) -> Cow<'_, str> {
    HeadingExtractor::default().extract_relevant(text)
}
