//! Line classifiers for section headings.
//!
//! Both patterns run against a single trimmed line.

use std::sync::LazyLock;

use regex::Regex;

/// Keywords (English and French) that open a section worth matching against a query.
const RELEVANT_KEYWORDS: &[&str] = &[
    r"comp[ée]tences?",
    r"skills?",
    r"technical\s*skills?",
    r"technologies?",
    r"outils?",
    r"tools?",
    r"projets?",
    r"projects?",
    r"exp[ée]riences?",
    r"r[ée]alisations?",
    r"achievements?",
    r"stack\s*technique",
    r"technical\s*stack",
    r"tech\s*stack",
    r"langages?",
    r"languages?",
    r"frameworks?",
];

static RELEVANT_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)^[\s•\-]*(?:{})[\s:]*$", RELEVANT_KEYWORDS.join("|"));
    Regex::new(&pattern).expect("relevant heading pattern is valid")
});

// One capitalized word, then lowercase words only. Body lines with digits,
// punctuation or a second capital do not qualify.
static ANY_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s•\-]*[A-ZÀ-Ü][a-zà-ü]+(?:\s+[a-zà-ü&]+)*[\s:]*$")
        .expect("generic heading pattern is valid")
});

/// Returns `true` if `line` is a heading that opens a relevant section.
pub fn is_relevant_heading(line: &str) -> bool {
    RELEVANT_HEADING.is_match(line)
}

/// Returns `true` if `line` looks like some section heading.
pub fn looks_like_heading(line: &str) -> bool {
    ANY_HEADING.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relevant_headings_match_with_markers() {
        for line in [
            "Skills",
            "SKILLS:",
            "- Projects",
            "• Expérience",
            "Compétences :",
            "Technical Skills",
            "Stack technique",
            "Langages",
            "Frameworks",
            "Achievements",
        ] {
            assert!(is_relevant_heading(line), "{line:?} should be relevant");
        }
    }

    #[test]
    fn relevant_heading_requires_whole_line() {
        assert!(!is_relevant_heading("Skills in Python and SQL"));
        assert!(!is_relevant_heading("My projects"));
        assert!(!is_relevant_heading("skillset"));
    }

    #[test]
    fn generic_heading_shape() {
        assert!(looks_like_heading("Education"));
        assert!(looks_like_heading("Formation:"));
        assert!(looks_like_heading("Soft skills"));
        assert!(looks_like_heading("Hobbies & interests"));
        assert!(looks_like_heading("Éducation"));
        assert!(!looks_like_heading("Centres d'intérêt"));
    }

    #[test]
    fn body_lines_are_not_generic_headings() {
        assert!(!looks_like_heading("Python, SQL, Kafka"));
        assert!(!looks_like_heading("Built a Kafka pipeline"));
        assert!(!looks_like_heading("2019 - 2023"));
        assert!(!looks_like_heading("python"));
    }
}
