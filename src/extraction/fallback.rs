// Whole-text pattern scan for documents the line pass could not read
use once_cell::sync::Lazy;
use regex::Regex;

use super::parser::SubjectResult;
use super::vocabulary;

// The three recovery shapes, scanned independently over the full text.
// Overlap between the first two templates means the same pair can be
// emitted twice; callers accept duplicates (see DESIGN.md).
static WORD_COLON_MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*:?\s*(\d{1,3})").unwrap());
static WORD_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\s+(\d{1,3})").unwrap());
static MARK_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,3})\s*-\s*(\w+)").unwrap());

// Which capture group holds the subject word for a given template.
enum Shape {
    WordFirst,
    MarkFirst,
}

/// Scan the raw text for loose subject/mark pairs. Best-effort: spurious and
/// duplicate hits are possible, silence is possible, nothing is fatal.
pub fn scan_text(text: &str) -> (Vec<SubjectResult>, Vec<String>) {
    let mut subjects = Vec::new();
    let errors = Vec::new();

    for (pattern, shape) in [
        (&WORD_COLON_MARK, Shape::WordFirst),
        (&WORD_MARK, Shape::WordFirst),
        (&MARK_WORD, Shape::MarkFirst),
    ] {
        for caps in pattern.captures_iter(text) {
            let (word, digits) = match shape {
                Shape::WordFirst => (&caps[1], &caps[2]),
                Shape::MarkFirst => (&caps[2], &caps[1]),
            };
            if let Some(subject) = validate_pair(word, digits) {
                subjects.push(subject);
            }
        }
    }

    (subjects, errors)
}

// A pair is kept only when the word carries a known alias and the digits
// land in [0,100].
fn validate_pair(word: &str, digits: &str) -> Option<SubjectResult> {
    if !vocabulary::contains_alias(word) {
        return None;
    }
    let mark: u32 = digits.parse().ok()?;
    if mark > 100 {
        return None;
    }
    Some(SubjectResult::new(vocabulary::canonical_name(word), mark as u8))
}
