//! Medical-safety risk classification.
//!
//! Decides per utterance whether the agent may answer directly, and with
//! which canned fallback when it may not.

mod checker;
mod keywords;
mod types;

pub use checker::RiskChecker;
pub use keywords::{fallback_message, RiskCategory, CRITICAL_COMBINATIONS, RISK_CATEGORIES};
pub use types::{RiskAssessment, RiskLevel};
