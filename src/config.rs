use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "Clearsay";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Term → label override table seeding the lexicon recognizer.
///
/// General-purpose recognition models miss domain terms (named medications
/// above all), so deployments seed the recognizer with an explicit
/// vocabulary. The defaults below are illustrative; a production deployment
/// would load these from the NHS medicines and symptoms databases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainLexicon {
    pub medications: Vec<String>,
    pub symptoms: Vec<String>,
    pub body_parts: Vec<String>,
}

impl Default for DomainLexicon {
    fn default() -> Self {
        fn terms(list: &[&str]) -> Vec<String> {
            list.iter().map(|t| t.to_string()).collect()
        }

        Self {
            medications: terms(&[
                "ibuprofen",
                "paracetamol",
                "aspirin",
                "metformin",
                "lisinopril",
                "amlodipine",
                "omeprazole",
                "simvastatin",
                "atorvastatin",
                "levothyroxine",
                "albuterol",
                "metoprolol",
                "losartan",
                "gabapentin",
                "hydrochlorothiazide",
                "sertraline",
                "prednisone",
                "amoxicillin",
                "warfarin",
                "insulin",
                "glucophage",
                "propranolol",
            ]),
            symptoms: terms(&[
                "pain", "hurts", "fluttery", "aches", "ache", "shakes", "sore", "swollen",
                "dizzy", "nausea", "fever", "cough", "tired",
            ]),
            body_parts: terms(&[
                "knee", "chest", "neck", "head", "heart", "back", "stomach", "arm", "leg",
                "shoulder", "ankle", "wrist",
            ]),
        }
    }
}

/// Response-gating policy for the risk classifier.
///
/// Whether a dangerous-symptom mention alone may escalate risk, or whether
/// an accompanying question is required, is a call for the safety team, not
/// an implementation detail. It ships as a knob rather than hard-coded
/// either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskPolicy {
    /// When true, a risk-keyword mention alone escalates. When false,
    /// keyword and combination rules fire only if the utterance also
    /// contains a question phrase ("should i", "is it safe", ...).
    pub escalate_on_mention: bool,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            escalate_on_mention: true,
        }
    }
}
