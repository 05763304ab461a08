// Controlled vocabulary of recognized subject names (English + Afrikaans)
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Recognized subject aliases, scanned in order with first-match-wins.
/// Order matters: "life science" sits after "physical science" but before
/// plain "science" root matching, and two aliases can both occur in one
/// line. Keep this table append-only.
pub static SUPPORTED_SUBJECTS: &[&str] = &[
    "mathematics",
    "math",
    "maths",
    "wiskunde",
    "english",
    "engels",
    "afrikaans",
    "physical science",
    "physics",
    "physical sciences",
    "life science",
    "life sciences",
    "biology",
    "geography",
    "history",
    "accounting",
    "economics",
    "business studies",
    "life orientation",
    "computer science",
    "it",
    "information technology",
    "tourisme",
    "tourism",
    "consumer studies",
];

// Alias -> canonical display name. Aliases absent here fall through to
// title-casing in canonical_name().
static CANONICAL_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("maths", "Mathematics"),
        ("math", "Mathematics"),
        ("wiskunde", "Mathematics"),
        ("engels", "English"),
        ("physical science", "Physical Science"),
        ("physical sciences", "Physical Science"),
        ("life science", "Life Science"),
        ("life sciences", "Life Science"),
        ("biology", "Life Science"),
        ("it", "Information Technology"),
        ("computer science", "Information Technology"),
        ("consumer studies", "Consumer Studies"),
        ("tourisme", "Tourism"),
    ])
});

/// First alias contained in the given lowercase line, if any.
pub fn find_alias(clean_line: &str) -> Option<&'static str> {
    SUPPORTED_SUBJECTS
        .iter()
        .find(|alias| clean_line.contains(*alias))
        .copied()
}

/// Whether the given word (any case) contains a recognized alias.
pub fn contains_alias(word: &str) -> bool {
    let lower = word.to_lowercase();
    SUPPORTED_SUBJECTS.iter().any(|alias| lower.contains(alias))
}

/// Canonical display name for an alias or raw matched word. Unmapped input
/// gets title-cased on the whole string ("history" -> "History").
pub fn canonical_name(alias: &str) -> String {
    let lower = alias.to_lowercase();
    if let Some(name) = CANONICAL_NAMES.get(lower.as_str()) {
        return (*name).to_string();
    }
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
