// Line-oriented extraction of subject/mark pairs from OCR text
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{fallback, vocabulary};
use crate::aps::AchievementLevel;

// First standalone 1-3 digit run on a line. Matched against the ORIGINAL
// line, not the normalized one, so "Wiskunde: 91" keeps its mark.
static MARK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{1,3})\b").unwrap());

// Narrow root-word net for lines where no full alias matched.
static ROOT_SUBJECT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(mathematics|english|science|geography|history|accounting|economics|business|afrikaans)")
        .unwrap()
});

// Everything that is not a word character or whitespace becomes a space.
static PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// One parsed subject line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectResult {
    pub name: String,
    pub mark: u8,
    pub level: AchievementLevel,
}

impl SubjectResult {
    /// Level is always derived from the mark, never supplied.
    pub fn new(name: String, mark: u8) -> Self {
        let level = AchievementLevel::from_mark(mark);
        Self { name, mark, level }
    }

    /// Validating constructor for marks from untrusted input. The extractor
    /// range-checks before construction; external callers go through here.
    pub fn try_new(name: String, mark: u8) -> crate::types::Result<Self> {
        if mark > 100 {
            return Err(crate::types::ApscanError::InvalidMark(mark));
        }
        Ok(Self::new(name, mark))
    }
}

/// Structured output of one extraction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Subjects in order of discovery. Duplicates are kept as-is.
    pub subjects: Vec<SubjectResult>,
    /// Rounded mean of the marks found by the line pass; 0 with no subjects.
    pub overall_average: u32,
    /// Advisory diagnostics. Empty does not imply a clean extraction.
    pub errors: Vec<String>,
    /// Upstream OCR confidence in [0,100], passed through unchanged.
    pub confidence: f32,
}

/// Recover a subject/mark table from raw OCR text.
///
/// Never fails: unparseable lines are skipped and an unreadable document
/// yields an empty result. When the line pass finds nothing, a whole-text
/// pattern scan runs as a last resort (see [`fallback`]).
pub fn extract(text: &str, confidence: f32) -> ExtractionResult {
    let mut subjects = Vec::new();
    let mut errors = Vec::new();
    let mut total_marks: u32 = 0;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(subject) = parse_line(line) {
            total_marks += subject.mark as u32;
            subjects.push(subject);
        }
    }

    // Average reflects the line pass only; the fallback scan below is too
    // noisy to feed it.
    let overall_average = if subjects.is_empty() {
        0
    } else {
        (total_marks as f64 / subjects.len() as f64).round() as u32
    };

    if subjects.is_empty() {
        let (recovered, mut fallback_errors) = fallback::scan_text(text);
        subjects.extend(recovered);
        errors.append(&mut fallback_errors);
    }

    ExtractionResult {
        subjects,
        overall_average,
        errors,
        confidence,
    }
}

/// Parse one line into a subject result, or None if the line carries no
/// recognizable subject or no plausible mark.
fn parse_line(line: &str) -> Option<SubjectResult> {
    let clean = normalize(line);

    let subject_name = vocabulary::find_alias(&clean)
        .map(vocabulary::canonical_name)
        .or_else(|| {
            ROOT_SUBJECT_RE
                .find(&clean)
                .map(|m| vocabulary::canonical_name(m.as_str()))
        })?;

    let mark: u32 = MARK_RE.captures(line)?.get(1)?.as_str().parse().ok()?;
    if mark > 100 {
        return None;
    }

    Some(SubjectResult::new(subject_name, mark as u8))
}

fn normalize(line: &str) -> String {
    PUNCT_RE
        .replace_all(&line.to_lowercase(), " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_result() {
        let result = extract("", 0.0);
        assert!(result.subjects.is_empty());
        assert_eq!(result.overall_average, 0);

        let result = extract("   \n\n  \t ", 0.0);
        assert!(result.subjects.is_empty());
        assert_eq!(result.overall_average, 0);
    }

    #[test]
    fn parses_a_clean_results_block() {
        let result = extract("Mathematics 85\nEnglish 72\nPhysical Science 63", 93.0);
        assert_eq!(result.subjects.len(), 3);

        assert_eq!(result.subjects[0].name, "Mathematics");
        assert_eq!(result.subjects[0].mark, 85);
        assert_eq!(result.subjects[0].level, AchievementLevel::Distinction);

        assert_eq!(result.subjects[1].name, "English");
        assert_eq!(result.subjects[1].mark, 72);
        assert_eq!(result.subjects[1].level, AchievementLevel::Merit);

        assert_eq!(result.subjects[2].name, "Physical Science");
        assert_eq!(result.subjects[2].mark, 63);
        assert_eq!(result.subjects[2].level, AchievementLevel::Achieved);

        // round((85+72+63)/3) = 73
        assert_eq!(result.overall_average, 73);
        assert_eq!(result.confidence, 93.0);
    }

    #[test]
    fn canonicalizes_afrikaans_names() {
        let result = extract("Wiskunde: 91", 88.0);
        assert_eq!(result.subjects.len(), 1);
        assert_eq!(result.subjects[0].name, "Mathematics");
        assert_eq!(result.subjects[0].mark, 91);
        assert_eq!(result.subjects[0].level, AchievementLevel::Distinction);
    }

    #[test]
    fn subject_without_mark_is_skipped() {
        let result = extract("Mathematics absent", 90.0);
        assert!(result.subjects.is_empty());
    }

    #[test]
    fn mark_without_subject_is_skipped() {
        let result = extract("Term total 85", 90.0);
        assert!(result.subjects.is_empty());
    }

    #[test]
    fn out_of_range_mark_is_skipped() {
        let result = extract("Mathematics 123", 90.0);
        assert!(result.subjects.is_empty());

        // 4+ digit runs never match the mark pattern.
        let result = extract("English 2024", 90.0);
        assert!(result.subjects.is_empty());
    }

    #[test]
    fn subjects_keep_source_order_and_duplicates() {
        let text = "History 55\nGeography 61\nHistory 58";
        let result = extract(text, 75.0);
        let names: Vec<&str> = result.subjects.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["History", "Geography", "History"]);
    }

    #[test]
    fn noisy_punctuation_still_parses() {
        let result = extract("**Life Orientation** -- 77%", 64.0);
        assert_eq!(result.subjects.len(), 1);
        assert_eq!(result.subjects[0].name, "Life orientation");
        assert_eq!(result.subjects[0].mark, 77);
    }

    #[test]
    fn root_word_net_catches_unlisted_phrasings() {
        // "science" alone is not in the alias table but the root net is.
        let result = extract("Science 66", 70.0);
        assert_eq!(result.subjects.len(), 1);
        assert_eq!(result.subjects[0].name, "Science");
        assert_eq!(result.subjects[0].mark, 66);
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "Wiskunde 81\nEngels 64\nGeography 59";
        let first = extract(text, 82.5);
        let second = extract(text, 82.5);
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_marks_are_rejected_by_try_new() {
        assert!(SubjectResult::try_new("Mathematics".into(), 101).is_err());
        assert!(SubjectResult::try_new("Mathematics".into(), 100).is_ok());
        assert!(SubjectResult::try_new("Mathematics".into(), 0).is_ok());
    }

    #[test]
    fn mean_rounds_half_up() {
        // (70 + 75) / 2 = 72.5 -> 73
        let result = extract("English 70\nHistory 75", 90.0);
        assert_eq!(result.overall_average, 73);
    }
}
