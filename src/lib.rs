//! Clearsay normalizes noisy speech-to-text utterances from a
//! patient-facing voice agent and gates responses on medical-safety risk.
//!
//! The pipeline strips transcription noise and disfluencies, resolves
//! self-corrections by aligning correction markers against recognized
//! entity spans, normalizes the residue, then classifies the cleaned
//! utterance before any response is generated. Unsafe turns answer with a
//! fixed fallback message instead of a substantive reply.

pub mod agent;
pub mod config;
pub mod normalize;
pub mod recognizer;
pub mod safety;
pub mod session;

pub use agent::{UtteranceOutcome, VoiceAgent};
pub use config::{DomainLexicon, RiskPolicy};
pub use normalize::{CleanedUtterance, UtteranceCleaner};
pub use recognizer::{EntityLabel, EntityRecognizer, EntitySpan, LexiconRecognizer, RecognizerError};
pub use safety::{RiskAssessment, RiskChecker, RiskLevel};
pub use session::SessionState;
