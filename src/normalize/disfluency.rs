//! Filler-word removal.
//!
//! Runs before self-correction detection: a filler sitting between a
//! correction marker and its target would break entity alignment.

use std::sync::LazyLock;

use regex::Regex;

/// Filler vocabulary, matched as whole words/phrases.
const DISFLUENCIES: &[&str] = &[
    "um",
    "uh",
    "er",
    "ah",
    "like",
    "you know",
    "i mean",
    "sort of",
    "kind of",
    "kinda",
    "basically",
    "actually",
];

static DISFLUENCY_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    DISFLUENCIES
        .iter()
        .map(|dis| {
            let pattern = format!(r"(?i),?\s*\b{}\b[,.]?\s*", regex::escape(dis));
            (*dis, Regex::new(&pattern).expect("invalid disfluency pattern"))
        })
        .collect()
});

/// Remove every occurrence of each filler along with its surrounding
/// comma/whitespace debris, substituting a single space so neighboring
/// words never fuse. Returns the stripped text and the distinct vocabulary
/// entries that matched (not occurrence counts).
pub fn strip_disfluencies(text: &str) -> (String, Vec<String>) {
    let mut text = text.to_string();
    let mut removed = Vec::new();

    for (dis, pattern) in DISFLUENCY_PATTERNS.iter() {
        if pattern.is_match(&text) {
            removed.push((*dis).to_string());
            text = pattern.replace_all(&text, " ").into_owned();
        }
    }

    (text, removed)
}
