//! Utterance normalization pipeline.
//!
//! Stage order is load-bearing: noise markers go first, fillers are
//! stripped before correction detection (a filler between a marker and its
//! target breaks entity alignment), whitespace cleanup runs last so no
//! stage sees another's residue, and entity projection runs on the final
//! text because corrections change which terms are present.

mod correction;
mod disfluency;
mod noise;
mod types;
mod whitespace;

pub use types::{CleanMetadata, CleanedUtterance, Correction, ExtractedEntities};

use crate::config::DomainLexicon;
use crate::recognizer::{EntityLabel, EntityRecognizer, LexiconRecognizer, RecognizerError};

/// Normalizes raw speech-to-text utterances.
///
/// Owns the entity recognizer. Recognition runs at most twice per
/// utterance, once to align corrections and once to project entities from
/// the final text, and spans are never carried across snapshots or
/// cached across utterances.
pub struct UtteranceCleaner<R = LexiconRecognizer> {
    recognizer: R,
}

impl UtteranceCleaner {
    /// Build a cleaner over the default clinical lexicon. Failure here is
    /// fatal for the pipeline; callers must not retry per utterance.
    pub fn new() -> Result<Self, RecognizerError> {
        Self::with_lexicon(&DomainLexicon::default())
    }

    pub fn with_lexicon(lexicon: &DomainLexicon) -> Result<Self, RecognizerError> {
        Ok(Self {
            recognizer: LexiconRecognizer::new(lexicon)?,
        })
    }
}

impl<R: EntityRecognizer> UtteranceCleaner<R> {
    /// Use a custom recognizer (e.g. a loaded statistical model).
    pub fn with_recognizer(recognizer: R) -> Self {
        Self { recognizer }
    }

    /// Normalize one raw utterance into clinical-grade text plus an audit
    /// trail of everything that was removed or rewritten.
    pub fn clean(&self, raw_text: &str) -> CleanedUtterance {
        let (text, noise_removed) = noise::strip_noise_markers(raw_text);
        let (text, disfluencies_removed) = disfluency::strip_disfluencies(&text);
        let (text, corrections) = correction::resolve_corrections(&self.recognizer, &text);
        let cleaned_text = whitespace::normalize_whitespace(&text);
        let entities = self.project_entities(&cleaned_text);

        if !corrections.is_empty() {
            tracing::debug!(count = corrections.len(), "Resolved self-corrections");
        }

        CleanedUtterance {
            metadata: CleanMetadata {
                original: raw_text.to_string(),
                corrections,
                disfluencies_removed,
                noise_removed,
            },
            cleaned_text,
            entities,
        }
    }

    /// Second recognition pass, over the final text only: a correction may
    /// have removed or introduced terms, so spans from the resolution pass
    /// must not be reused here.
    fn project_entities(&self, cleaned_text: &str) -> ExtractedEntities {
        let mut entities = ExtractedEntities::default();
        for span in self.recognizer.recognize(cleaned_text) {
            match span.label {
                EntityLabel::Medication => entities.medications.push(span.text),
                EntityLabel::Symptom => entities.symptoms.push(span.text),
                EntityLabel::BodyPart => entities.body_parts.push(span.text),
                EntityLabel::Date => {}
            }
        }
        entities
    }
}
