//! Turn orchestration: normalize, classify, accumulate.

use serde::Serialize;

use crate::config::{DomainLexicon, RiskPolicy};
use crate::normalize::{CleanMetadata, ExtractedEntities, UtteranceCleaner};
use crate::recognizer::RecognizerError;
use crate::safety::{RiskAssessment, RiskChecker};
use crate::session::SessionState;

/// Everything downstream needs to act on one processed turn.
#[derive(Debug, Clone, Serialize)]
pub struct UtteranceOutcome {
    pub cleaned_text: String,
    pub metadata: CleanMetadata,
    pub entities: ExtractedEntities,
    pub safety: RiskAssessment,
    /// Snapshot of the session after this turn was merged.
    pub state: SessionState,
    /// Mirrors `safety.is_safe`. When false the reply must be
    /// `safety.message`, never a substantive answer.
    pub should_respond: bool,
}

/// Owns the pipeline and one conversation's state.
///
/// Single-writer discipline: one utterance is processed to completion
/// before the next touches the same session. Independent conversations get
/// independent agents; nothing here is shared.
pub struct VoiceAgent {
    cleaner: UtteranceCleaner,
    checker: RiskChecker,
    state: SessionState,
}

impl VoiceAgent {
    /// Build an agent over the default lexicon and policy. Recognizer
    /// construction failure is fatal; there is no degraded mode.
    pub fn new() -> Result<Self, RecognizerError> {
        Self::with_config(&DomainLexicon::default(), RiskPolicy::default())
    }

    pub fn with_config(lexicon: &DomainLexicon, policy: RiskPolicy) -> Result<Self, RecognizerError> {
        Ok(Self {
            cleaner: UtteranceCleaner::with_lexicon(lexicon)?,
            checker: RiskChecker::new(policy),
            state: SessionState::new(),
        })
    }

    /// Process one utterance: clean, classify, merge entities into the
    /// session, count the turn.
    pub fn process(&mut self, raw_text: &str) -> UtteranceOutcome {
        let cleaned = self.cleaner.clean(raw_text);
        let safety = self.checker.check(&cleaned.cleaned_text);

        self.state.merge_entities(&cleaned.entities);
        self.state.turn_count += 1;

        tracing::info!(
            conversation_id = %self.state.conversation_id,
            turn = self.state.turn_count,
            risk = safety.level.as_str(),
            should_respond = safety.is_safe,
            "Processed utterance"
        );

        let should_respond = safety.is_safe;
        UtteranceOutcome {
            cleaned_text: cleaned.cleaned_text,
            metadata: cleaned.metadata,
            entities: cleaned.entities,
            safety,
            state: self.state.clone(),
            should_respond,
        }
    }

    /// Drop all accumulated state and start a fresh conversation.
    pub fn reset_state(&mut self) {
        self.state = SessionState::new();
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
