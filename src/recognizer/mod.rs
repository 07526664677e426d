//! Entity recognition boundary.
//!
//! The pipeline consumes recognition through the [`EntityRecognizer`] trait
//! so the concrete recognizer (a loaded statistical model, or the
//! deterministic lexicon shipped here) stays swappable. Labels are mapped
//! into a closed set at this boundary; a recognizer's native label
//! vocabulary never leaks into the pipeline.

mod lexicon;

pub use lexicon::LexiconRecognizer;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed label set used by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Medication,
    Symptom,
    BodyPart,
    /// Relative temporal phrases ("two weeks ago"). Tagged so corrections
    /// over dates still align; never projected into session state.
    Date,
}

/// A labeled substring of one text snapshot.
///
/// `start`/`end` are byte offsets into exactly the string that produced the
/// span. Once that string is mutated the offsets are meaningless; spans
/// from different snapshots must never be mixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub label: EntityLabel,
}

/// Recognizer construction failure. Fatal for the whole pipeline: there is
/// no degraded per-utterance fallback, callers must not retry per turn.
#[derive(Error, Debug)]
pub enum RecognizerError {
    #[error("failed to compile recognizer pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Tags labeled spans in text. Deterministic for a fixed configuration and
/// input; results are only valid for the exact text they were computed
/// against and must not be cached across utterances.
pub trait EntityRecognizer {
    /// Return all recognized spans, sorted by start offset, non-overlapping.
    fn recognize(&self, text: &str) -> Vec<EntitySpan>;
}
