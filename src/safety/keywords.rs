//! Fixed risk vocabulary.
//!
//! Keyword categories escalate to a per-category level; combination rules
//! force Critical when both sides of a pair appear. The lists are
//! illustrative triage seeds; a production deployment would source them
//! from the NHS medicines and symptoms databases.

use super::types::RiskLevel;

/// A keyword category and the level a hit escalates to.
pub struct RiskCategory {
    pub name: &'static str,
    pub level: RiskLevel,
    pub keywords: &'static [&'static str],
}

pub const RISK_CATEGORIES: &[RiskCategory] = &[
    RiskCategory {
        name: "dosage",
        level: RiskLevel::High,
        keywords: &["double", "triple", "increase", "more", "extra"],
    },
    RiskCategory {
        name: "cardiac",
        level: RiskLevel::Critical,
        keywords: &[
            "heart attack",
            "chest pain",
            "heart pain",
            "cardiac arrest",
            "irregular heartbeat",
            "fluttery",
            "palpitations",
        ],
    },
    RiskCategory {
        name: "breathing",
        level: RiskLevel::Critical,
        keywords: &[
            "can't breathe",
            "difficulty breathing",
            "shortness of breath",
            "choking",
            "suffocating",
        ],
    },
    RiskCategory {
        name: "severe_pain",
        level: RiskLevel::High,
        keywords: &["severe pain", "worst pain", "unbearable", "extreme pain"],
    },
    RiskCategory {
        name: "bleeding",
        level: RiskLevel::Medium,
        keywords: &["bleeding", "blood", "hemorrhage"],
    },
    RiskCategory {
        name: "mental_health",
        level: RiskLevel::Critical,
        keywords: &["suicide", "kill myself", "end it", "self-harm", "hurt myself"],
    },
    RiskCategory {
        name: "allergic",
        level: RiskLevel::Critical,
        keywords: &["allergic reaction", "anaphylaxis", "swelling throat", "hives"],
    },
    RiskCategory {
        name: "neurological",
        level: RiskLevel::Medium,
        keywords: &["stroke", "seizure", "paralysis", "numb", "tingling"],
    },
    RiskCategory {
        name: "medication_danger",
        level: RiskLevel::High,
        keywords: &["stopped taking", "ran out", "skip", "forgot"],
    },
];

/// A hit on both sides of any pair forces Critical regardless of prior
/// level.
pub const CRITICAL_COMBINATIONS: &[(&[&str], &[&str])] = &[
    (
        &["heart", "chest", "cardiac"],
        &["pain", "ache", "pressure", "tight"],
    ),
    (
        &["breathe", "breathing"],
        &["difficult", "hard", "can't", "cannot"],
    ),
    (
        &["dose", "dosage", "medication"],
        &["double", "increase", "more", "change"],
    ),
];

/// Question phrases consulted by the strict policy, which only escalates
/// when the speaker is actually asking the agent something.
pub const QUESTION_PHRASES: &[&str] =
    &["should i", "can i", "is it safe", "is it dangerous", "what do i"];

/// Canned reply for each final risk level. Unsafe levels replace the
/// substantive answer entirely.
pub fn fallback_message(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Critical => {
            "This sounds like a medical emergency. Please call emergency services \
             (999 in UK, 911 in US) or go to A&E immediately."
        }
        RiskLevel::High => {
            "I cannot provide medical advice on this matter. Please contact your GP \
             or healthcare provider immediately."
        }
        RiskLevel::Medium => {
            "I can provide general information, but please consult with your \
             healthcare provider for personalized medical advice."
        }
        RiskLevel::Low => "Safe to provide general information.",
    }
}

pub const NO_RISK_REASON: &str = "No risk detected";
