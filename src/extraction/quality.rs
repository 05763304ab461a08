// Heuristic quality scoring for raw OCR text
//
// The upstream engine reports its own confidence, but that number says
// nothing about whether the text looks like a results sheet. These checks
// give callers a second, content-based signal to cross-check against.

/// Score raw OCR text in [0.0, 1.0]. Higher means the text plausibly holds
/// a readable subject/mark table.
pub fn quality_score(text: &str) -> f32 {
    if text.trim().is_empty() {
        return 0.0;
    }

    let checks = [
        text.len() > 10,                 // more than a stray token
        text.chars().any(|c| c.is_ascii_digit()), // a results sheet has marks
        !is_mostly_gibberish(text),
        has_plausible_words(text),
        has_reasonable_whitespace(text),
    ];

    let passed = checks.iter().filter(|&&x| x).count() as f32;
    passed / checks.len() as f32
}

// Vowel ratio far outside normal prose usually means garbled recognition.
fn is_mostly_gibberish(text: &str) -> bool {
    let vowel_count = text.chars().filter(|c| "aeiouAEIOU".contains(*c)).count();
    let vowel_ratio = vowel_count as f32 / text.len() as f32;

    !(0.1..=0.6).contains(&vowel_ratio)
}

fn has_plausible_words(text: &str) -> bool {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return false;
    }

    let plausible = words
        .iter()
        .filter(|w| w.len() >= 2 && w.len() <= 20)
        .filter(|w| {
            let alpha = w.chars().filter(|c| c.is_alphanumeric()).count() as f32;
            alpha / w.len() as f32 > 0.7
        })
        .count();

    plausible as f32 / words.len() as f32 > 0.5
}

fn has_reasonable_whitespace(text: &str) -> bool {
    let whitespace = text.chars().filter(|c| c.is_whitespace()).count() as f32;
    let ratio = whitespace / text.len() as f32;

    ratio > 0.05 && ratio < 0.5
}
