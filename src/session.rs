//! Per-conversation accumulator owned by the turn orchestrator.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::normalize::ExtractedEntities;

/// Everything remembered across the turns of one conversation. In-memory
/// only: merged by exactly one utterance at a time and explicitly
/// resettable, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub conversation_id: Uuid,
    pub symptoms: BTreeSet<String>,
    pub medications: BTreeSet<String>,
    pub conditions: BTreeSet<String>,
    pub turn_count: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            conversation_id: Uuid::new_v4(),
            symptoms: BTreeSet::new(),
            medications: BTreeSet::new(),
            conditions: BTreeSet::new(),
            turn_count: 0,
        }
    }

    /// Merge one utterance's entities. Body parts fold into the symptom
    /// set as "<part> issue" so downstream consumers see one complaint
    /// list; sets keep every merge duplicate-free.
    pub fn merge_entities(&mut self, entities: &ExtractedEntities) {
        for medication in &entities.medications {
            self.add_medication(medication);
        }
        for symptom in &entities.symptoms {
            self.add_symptom(symptom);
        }
        for part in &entities.body_parts {
            self.add_symptom(&format!("{part} issue"));
        }
    }

    pub fn add_symptom(&mut self, symptom: &str) {
        if !symptom.is_empty() {
            self.symptoms.insert(symptom.to_string());
        }
    }

    pub fn add_medication(&mut self, medication: &str) {
        if !medication.is_empty() {
            self.medications.insert(medication.to_string());
        }
    }

    pub fn add_condition(&mut self, condition: &str) {
        if !condition.is_empty() {
            self.conditions.insert(condition.to_string());
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
