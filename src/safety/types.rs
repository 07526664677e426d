use serde::{Deserialize, Serialize};

/// Ordered severity scale driving whether the agent may answer directly.
/// Derives `Ord` so escalation is a plain `max`: a later, weaker match can
/// never lower the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// Outcome of classifying one cleaned utterance. Computed fresh per turn;
/// no memory across turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// Whether the agent may produce a substantive reply. When false, the
    /// reply must be `message` verbatim, never a partial or hedged answer.
    pub is_safe: bool,
    pub message: String,
    /// "category:keyword" tags for every rule hit, in scan order.
    pub triggered_keywords: Vec<String>,
    pub reason: String,
}
