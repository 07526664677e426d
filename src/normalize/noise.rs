//! Bracketed transcription-noise removal.

use std::sync::LazyLock;

use regex::Regex;

/// Noise markers emitted by the transcription layer. Closed set; anything
/// else in brackets is treated as speech.
static NOISE_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?:noise|inaudible|unclear|cough|pause)\]").unwrap());

/// Remove every noise marker. Returns the stripped text and whether
/// anything was removed.
pub fn strip_noise_markers(text: &str) -> (String, bool) {
    if NOISE_MARKERS.is_match(text) {
        (NOISE_MARKERS.replace_all(text, "").into_owned(), true)
    } else {
        (text.to_string(), false)
    }
}
