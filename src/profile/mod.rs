//! Candidate profile helpers: contact email and a human-friendly display name.
//!
//! These are best-effort labels for presentation. They never affect scoring.


use std::sync::LazyLock;

use regex::Regex;

/// Label used when neither the file name nor the content yields a name.
pub const UNKNOWN_CANDIDATE: &str = "Unknown candidate";

/// File-name stems that say nothing about who the document belongs to.
const GENERIC_NAMES: &[&str] = &["document", "cv", "resume", "fichier", "scan", "pdf"];

const FILENAME_PREFIXES: &[&str] = &["CV-", "CV_", "cv-", "cv_", "CV ", "Resume-", "resume-"];

/// Names are looked for near the top of the document only.
const NAME_SCAN_CHARS: usize = 500;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern is valid")
});

static DUPLICATE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(\d+\)\s*").expect("duplicate marker pattern is valid"));

// Line-leading `First LAST`, then `LAST First`, then `First LAST` anywhere.
// Names never span lines.
static NAME_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    const LOWER: &str = "a-zéèêëàâäùûüôöîï";
    const UPPER: &str = "A-Zéèêëàâäùûüôöîï";
    [
        format!(r"(?m)^([A-Z][{LOWER}]+[ \t]+[A-Z][{UPPER}]+(?:[ \t]+[A-Z][{LOWER}]+)?)"),
        format!(r"([A-Z][A-Z]+[ \t]+[A-Z][{LOWER}]+)"),
        format!(r"([A-Z][{LOWER}]+[ \t]+[A-Z][A-Z]+)"),
    ]
    .map(|pattern| Regex::new(&pattern).expect("name pattern is valid"))
});

/// Returns the first email address found in `text`.
pub fn extract_email(text: &str) -> Option<&str> {
    EMAIL.find(text).map(|m| m.as_str())
}

/// Derives a readable name from a resume file name.
///
/// `"CV-jean_dupont (2).pdf"` becomes `"Jean Dupont"`.
pub fn name_from_filename(filename: &str) -> String {
    let mut name = strip_pdf_extensions(filename).to_string();
    for prefix in FILENAME_PREFIXES {
        name = name.replace(prefix, "");
    }
    let name = DUPLICATE_MARKER.replace_all(&name, " ");
    let name = name.replace(['-', '_'], " ");
    let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
    title_case(&name)
}

/// Looks for a 2-4 word capitalized name near the top of `content`.
pub fn name_from_content(content: &str) -> Option<String> {
    let header = match content.char_indices().nth(NAME_SCAN_CHARS) {
        Some((idx, _)) => &content[..idx],
        None => content,
    };

    NAME_PATTERNS.iter().find_map(|pattern| {
        let name = pattern.captures(header)?.get(1)?.as_str().trim();
        let words = name.split_whitespace().count();
        ((2..=4).contains(&words) && name.chars().count() < 40).then(|| title_case(name))
    })
}

/// Picks the display name for a document: file name first, content when the
/// file name is generic.
pub fn display_name(identifier: &str, content: &str) -> String {
    let from_file = name_from_filename(identifier);

    let generic = GENERIC_NAMES.contains(&from_file.to_lowercase().as_str())
        || from_file.chars().count() < 3;
    if generic && let Some(name) = name_from_content(content) {
        return name;
    }

    if from_file.is_empty() {
        UNKNOWN_CANDIDATE.to_string()
    } else {
        from_file
    }
}

fn strip_pdf_extensions(mut name: &str) -> &str {
    loop {
        let Some(split) = name.len().checked_sub(4) else {
            return name;
        };
        if !name.is_char_boundary(split) || !name[split..].eq_ignore_ascii_case(".pdf") {
            return name;
        }
        name = &name[..split];
    }
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
