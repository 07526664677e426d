//! Deterministic lexicon-backed recognizer.
//!
//! Matches the seeded term table (case-insensitive, whole words, longest
//! alternative first) plus a relative-date pattern for phrases a term table
//! cannot enumerate. Stands in for a statistical model wherever one is
//! unavailable, and doubles as the override layer seeding domain terms a
//! general-purpose model misses.

use regex::Regex;

use crate::config::DomainLexicon;

use super::{EntityLabel, EntityRecognizer, EntitySpan, RecognizerError};

/// Relative temporal phrases: "two Tuesdays ago", "three days ago".
const RELATIVE_DATE_PATTERN: &str =
    r"(?i)\b(?:a|an|one|two|three|four|five|six|seven|eight|nine|ten|\d+)\s+\w+\s+ago\b";

pub struct LexiconRecognizer {
    groups: Vec<(EntityLabel, Regex)>,
}

impl LexiconRecognizer {
    /// Compile the lexicon into match groups. Compilation failure is a
    /// fatal startup error for the whole pipeline.
    pub fn new(lexicon: &DomainLexicon) -> Result<Self, RecognizerError> {
        let mut groups = Vec::with_capacity(4);

        for (label, terms) in [
            (EntityLabel::Medication, &lexicon.medications),
            (EntityLabel::Symptom, &lexicon.symptoms),
            (EntityLabel::BodyPart, &lexicon.body_parts),
        ] {
            if let Some(regex) = compile_terms(terms)? {
                groups.push((label, regex));
            }
        }

        groups.push((EntityLabel::Date, Regex::new(RELATIVE_DATE_PATTERN)?));

        Ok(Self { groups })
    }
}

/// Build one alternation over a term list, longest alternative first so a
/// multi-word term always beats its own prefix.
fn compile_terms(terms: &[String]) -> Result<Option<Regex>, RecognizerError> {
    let mut sorted: Vec<&str> = terms
        .iter()
        .map(|t| t.as_str())
        .filter(|t| !t.trim().is_empty())
        .collect();
    if sorted.is_empty() {
        return Ok(None);
    }
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let alternation = sorted
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    let regex = Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))?;
    Ok(Some(regex))
}

impl EntityRecognizer for LexiconRecognizer {
    fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();
        for (label, regex) in &self.groups {
            for found in regex.find_iter(text) {
                spans.push(EntitySpan {
                    start: found.start(),
                    end: found.end(),
                    text: found.as_str().to_string(),
                    label: *label,
                });
            }
        }

        // Leftmost-longest wins when groups overlap.
        spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
        let mut result: Vec<EntitySpan> = Vec::with_capacity(spans.len());
        for span in spans {
            if result.last().map_or(true, |prev| span.start >= prev.end) {
                result.push(span);
            }
        }
        result
    }
}
