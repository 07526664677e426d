//! Risk classification for cleaned utterances.
//!
//! Rules fire on the QUERY, before any response is generated; the model
//! downstream is never trusted to triage an emergency. Every rule is
//! evaluated (no short-circuit) so the assessment carries every match for
//! the audit trail, and the level only ever escalates within one pass.

use crate::config::RiskPolicy;

use super::keywords::{
    fallback_message, CRITICAL_COMBINATIONS, NO_RISK_REASON, QUESTION_PHRASES, RISK_CATEGORIES,
};
use super::types::{RiskAssessment, RiskLevel};

/// Scores cleaned utterances against the fixed risk vocabulary. Stateless
/// across turns; total, always returns an assessment and never errors.
#[derive(Debug, Clone, Default)]
pub struct RiskChecker {
    policy: RiskPolicy,
}

impl RiskChecker {
    pub fn new(policy: RiskPolicy) -> Self {
        Self { policy }
    }

    /// Classify `text` and decide whether the agent may respond.
    pub fn check(&self, text: &str) -> RiskAssessment {
        let text_lower = text.to_lowercase();

        if !self.policy.escalate_on_mention && !contains_question(&text_lower) {
            // Strict policy: a mention with no question attached is
            // conversation, not a request for advice.
            return safe_assessment();
        }

        let mut level = RiskLevel::Low;
        let mut triggered = Vec::new();
        let mut reasons = Vec::new();

        for category in RISK_CATEGORIES {
            for keyword in category.keywords {
                if text_lower.contains(keyword) {
                    triggered.push(format!("{}:{}", category.name, keyword));
                    match category.level {
                        RiskLevel::Critical => {
                            reasons.push(format!("Critical {} indicator detected", category.name));
                        }
                        RiskLevel::High => {
                            reasons.push(format!("High-risk {} query", category.name));
                        }
                        _ => {}
                    }
                    level = level.max(category.level);
                }
            }
        }

        for (first, second) in CRITICAL_COMBINATIONS {
            let has_first = first.iter().any(|k| text_lower.contains(k));
            let has_second = second.iter().any(|k| text_lower.contains(k));
            if has_first && has_second {
                level = RiskLevel::Critical;
                triggered.push("combination:critical".to_string());
                reasons.push("Critical combination detected".to_string());
            }
        }

        let is_safe = level <= RiskLevel::Medium;
        let reason = if reasons.is_empty() {
            NO_RISK_REASON.to_string()
        } else {
            reasons.join(" | ")
        };

        if !is_safe {
            tracing::warn!(
                level = level.as_str(),
                triggered = ?triggered,
                "Unsafe utterance, withholding substantive response"
            );
        }

        RiskAssessment {
            level,
            is_safe,
            message: fallback_message(level).to_string(),
            triggered_keywords: triggered,
            reason,
        }
    }
}

fn contains_question(text_lower: &str) -> bool {
    QUESTION_PHRASES.iter().any(|q| text_lower.contains(q))
}

fn safe_assessment() -> RiskAssessment {
    RiskAssessment {
        level: RiskLevel::Low,
        is_safe: true,
        message: fallback_message(RiskLevel::Low).to_string(),
        triggered_keywords: Vec::new(),
        reason: NO_RISK_REASON.to_string(),
    }
}
