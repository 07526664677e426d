use serde::{Deserialize, Serialize};

/// One resolved self-correction: the superseded value and what replaced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub before: String,
    pub after: String,
}

/// Entities extracted from the final cleaned text, bucketed for state
/// merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    pub medications: Vec<String>,
    pub symptoms: Vec<String>,
    pub body_parts: Vec<String>,
}

/// Audit trail of what normalization changed.
///
/// The stages are driven by fixed vocabularies today, but the moment any of
/// them is model-driven this record is what human reviewers audit, so it is
/// kept complete from the start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanMetadata {
    /// The raw utterance exactly as received from speech-to-text.
    pub original: String,
    /// Resolved self-corrections, ordered by the superseded offset.
    pub corrections: Vec<Correction>,
    /// Distinct disfluency vocabulary entries that matched at least once.
    pub disfluencies_removed: Vec<String>,
    pub noise_removed: bool,
}

/// Result of normalizing one utterance. Produced once; immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedUtterance {
    pub cleaned_text: String,
    pub metadata: CleanMetadata,
    pub entities: ExtractedEntities,
}
