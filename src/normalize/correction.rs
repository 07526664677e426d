//! Self-correction resolution.
//!
//! A speaker who restates a value ("I take Glucophage, no wait, Ibuprofen")
//! means the later value. Markers are aligned against recognized entity
//! spans rather than surface patterns: the first entity after a marker
//! supersedes the most recent earlier entity with the same label, falling
//! back to the nearest preceding word when the recognizer tags nothing
//! before the marker (dates, numbers, misrecognized drug names).
//!
//! All offsets refer to one text snapshot. Spans are computed once up
//! front, every marker is scanned against that snapshot, and the rewrites
//! are applied in a single pass at the end, rightmost first, so earlier
//! offsets never drift.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::recognizer::{EntityRecognizer, EntitySpan};

use super::types::Correction;

/// Marker vocabulary that introduces a self-correction.
const CORRECTION_MARKERS: &[&str] = &["no", "wait", "sorry", "actually", "i mean", "or", "rather"];

static MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:no|wait|sorry|actually|i mean|or|rather)\b[,\s]*").unwrap()
});

/// Ellipses are spoken pauses, not sentence punctuation.
static ELLIPSIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{2,}").unwrap());

static WORD_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9']+").unwrap());

/// A pending rewrite against the snapshot: remove
/// `insert_at..remove_through`, insert `replacement_text`.
#[derive(Debug, Clone)]
struct Replacement {
    insert_at: usize,
    remove_through: usize,
    replacement_text: String,
    superseded: String,
}

/// Resolve self-corrections in `text`, keeping only the corrected values.
/// Returns the rewritten text and the ordered list of (before, after)
/// pairs for audit and state tracking.
pub fn resolve_corrections<R: EntityRecognizer>(
    recognizer: &R,
    text: &str,
) -> (String, Vec<Correction>) {
    // Pauses rendered as "..." or spelled-out words like "pro-pran-o-lol"
    // would otherwise split entities; dashes are removed outright so the
    // pieces re-join.
    let text = ELLIPSIS.replace_all(text, " ").into_owned();
    let text = text.replace('-', "");

    let spans = recognizer.recognize(&text);

    // Keyed by the superseded item's start offset: a later marker that
    // re-targets the same before-item overwrites instead of duplicating.
    let mut replacements: BTreeMap<usize, Replacement> = BTreeMap::new();

    for marker in MARKER_PATTERN.find_iter(&text) {
        // The first entity at or after the marker is what the speaker
        // corrected *to*. A marker with no entity after it is conversational
        // ("no thanks"), not a correction.
        let Some(after) = spans.iter().find(|s| s.start >= marker.end()) else {
            continue;
        };
        if is_marker_word(&after.text) {
            // Recognizer false positive on the marker itself.
            continue;
        }

        let before = find_before_entity(&spans, marker.start(), after)
            .map(|span| (span.start, span.text.clone()))
            .or_else(|| find_before_token(&text, marker.start()));

        if let Some((start, superseded)) = before {
            replacements.insert(
                start,
                Replacement {
                    insert_at: start,
                    remove_through: after.end,
                    replacement_text: after.text.clone(),
                    superseded,
                },
            );
        }
    }

    let corrections: Vec<Correction> = replacements
        .values()
        .map(|r| Correction {
            before: r.superseded.clone(),
            after: r.replacement_text.clone(),
        })
        .collect();

    let rewritten = apply_replacements(&text, replacements);
    (rewritten, corrections)
}

fn is_marker_word(text: &str) -> bool {
    CORRECTION_MARKERS.contains(&text.to_lowercase().as_str())
}

/// Most recent span ending at or before the marker that shares the
/// after-entity's label. Corrections target the last-mentioned value of
/// that category.
fn find_before_entity<'a>(
    spans: &'a [EntitySpan],
    marker_start: usize,
    after: &EntitySpan,
) -> Option<&'a EntitySpan> {
    spans
        .iter()
        .filter(|s| s.end <= marker_start && s.label == after.label)
        .next_back()
}

/// Nearest word before the marker that is longer than one character and not
/// itself a correction marker. Covers corrections over values the
/// recognizer does not tag.
fn find_before_token(text: &str, marker_start: usize) -> Option<(usize, String)> {
    WORD_TOKEN
        .find_iter(&text[..marker_start])
        .filter(|m| m.as_str().len() > 1 && !is_marker_word(m.as_str()))
        .last()
        .map(|m| (m.start(), m.as_str().to_string()))
}

/// Apply the pending rewrites. Overlapping regions are coalesced ascending
/// first (a chained correction "X, no Y, wait, Z" re-targets its own
/// earlier rewrite, and the last determination wins), then applied
/// rightmost-first so remaining offsets stay valid.
fn apply_replacements(text: &str, replacements: BTreeMap<usize, Replacement>) -> String {
    let mut coalesced: Vec<Replacement> = Vec::with_capacity(replacements.len());
    for repl in replacements.into_values() {
        match coalesced.last_mut() {
            Some(prev) if repl.insert_at < prev.remove_through => {
                prev.remove_through = prev.remove_through.max(repl.remove_through);
                prev.replacement_text = repl.replacement_text;
            }
            _ => coalesced.push(repl),
        }
    }

    let mut result = text.to_string();
    for repl in coalesced.iter().rev() {
        result.replace_range(repl.insert_at..repl.remove_through, &repl.replacement_text);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DomainLexicon;
    use crate::recognizer::{EntityLabel, LexiconRecognizer};

    /// Recognizer stub returning a fixed span set, for precise control over
    /// alignment cases the lexicon cannot produce.
    struct FixedSpans(Vec<EntitySpan>);

    impl EntityRecognizer for FixedSpans {
        fn recognize(&self, _text: &str) -> Vec<EntitySpan> {
            self.0.clone()
        }
    }

    fn span(start: usize, text: &str, label: EntityLabel) -> EntitySpan {
        EntitySpan {
            start,
            end: start + text.len(),
            text: text.to_string(),
            label,
        }
    }

    fn lexicon() -> LexiconRecognizer {
        LexiconRecognizer::new(&DomainLexicon::default()).unwrap()
    }

    // ── Entity-aligned corrections ─────────────────────────────

    #[test]
    fn keeps_corrected_medication_only() {
        let (text, corrections) =
            resolve_corrections(&lexicon(), "I take Glucophage, no wait, Ibuprofen for it");
        assert!(text.contains("Ibuprofen"));
        assert!(!text.contains("Glucophage"));
        assert_eq!(
            corrections,
            vec![Correction {
                before: "Glucophage".into(),
                after: "Ibuprofen".into(),
            }]
        );
    }

    #[test]
    fn two_markers_one_target_yield_one_correction() {
        // "no" and "wait" both point at the same before/after pair; the
        // audit list must not duplicate it.
        let (_, corrections) =
            resolve_corrections(&lexicon(), "Glucophage no, wait, Ibuprofen helps");
        assert_eq!(corrections.len(), 1);
    }

    #[test]
    fn targets_most_recent_same_label_entity() {
        // Two medications precede the marker; the closer one is superseded.
        let text = "aspirin then metformin, no, ibuprofen";
        let (rewritten, corrections) = resolve_corrections(&lexicon(), text);
        assert!(rewritten.contains("aspirin"));
        assert!(!rewritten.contains("metformin"));
        assert_eq!(corrections[0].before, "metformin");
        assert_eq!(corrections[0].after, "ibuprofen");
    }

    #[test]
    fn label_mismatch_skips_earlier_entity() {
        // A body part before the marker cannot be superseded by a
        // medication after it; with no same-label entity the resolver falls
        // back to the nearest token, which here is the body part itself.
        let spans = vec![
            span(3, "knee", EntityLabel::BodyPart),
            span(12, "ibuprofen", EntityLabel::Medication),
        ];
        let text = "my knee, no ibuprofen";
        let (rewritten, corrections) = resolve_corrections(&FixedSpans(spans), text);
        assert_eq!(rewritten, "my ibuprofen");
        assert_eq!(corrections[0].before, "knee");
    }

    // ── Token fallback ─────────────────────────────────────────

    #[test]
    fn falls_back_to_token_for_untagged_values() {
        let (text, corrections) =
            resolve_corrections(&lexicon(), "last Tuesday, no wait, two Tuesdays ago");
        assert!(text.contains("two Tuesdays ago"));
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].before, "Tuesday");
        assert_eq!(corrections[0].after, "two Tuesdays ago");
    }

    #[test]
    fn dash_rejoined_word_is_corrected() {
        let (text, corrections) =
            resolve_corrections(&lexicon(), "propanol? No, pro-pran-o-lol for the shakes");
        assert!(text.contains("propranolol"));
        assert!(!text.contains("propanol?"));
        assert_eq!(corrections[0].before, "propanol");
        assert_eq!(corrections[0].after, "propranolol");
    }

    #[test]
    fn fallback_skips_single_letters_and_markers() {
        // "I" is too short and "no" is a marker; neither may be superseded.
        let spans = vec![span(9, "ibuprofen", EntityLabel::Medication)];
        let (rewritten, corrections) = resolve_corrections(&FixedSpans(spans), "I no, or ibuprofen");
        assert_eq!(rewritten, "I no, or ibuprofen");
        assert!(corrections.is_empty());
    }

    // ── Markers that are not corrections ───────────────────────

    #[test]
    fn marker_without_following_entity_is_left_alone() {
        let (text, corrections) = resolve_corrections(&lexicon(), "no thanks, that is all");
        assert_eq!(text, "no thanks, that is all");
        assert!(corrections.is_empty());
    }

    #[test]
    fn skips_marker_shaped_after_entity() {
        // A recognizer false positive tagging the marker word itself must
        // not be treated as the corrected value.
        let spans = vec![
            span(0, "ibuprofen", EntityLabel::Medication),
            span(14, "wait", EntityLabel::Medication),
        ];
        let text = "ibuprofen, no wait";
        let (rewritten, corrections) = resolve_corrections(&FixedSpans(spans), text);
        assert_eq!(rewritten, text);
        assert!(corrections.is_empty());
    }

    #[test]
    fn text_without_markers_is_untouched() {
        let (text, corrections) = resolve_corrections(&lexicon(), "my knee hurts a lot");
        assert_eq!(text, "my knee hurts a lot");
        assert!(corrections.is_empty());
    }

    // ── Chained corrections ────────────────────────────────────

    #[test]
    fn chained_corrections_keep_final_determination() {
        let text = "Glucophage, no Ibuprofen, wait, Paracetamol";
        let (rewritten, corrections) = resolve_corrections(&lexicon(), text);
        assert_eq!(rewritten, "Paracetamol");
        assert_eq!(
            corrections,
            vec![
                Correction {
                    before: "Glucophage".into(),
                    after: "Ibuprofen".into(),
                },
                Correction {
                    before: "Ibuprofen".into(),
                    after: "Paracetamol".into(),
                },
            ]
        );
    }

    // ── Pause normalization ────────────────────────────────────

    #[test]
    fn ellipses_become_spaces_without_corrections() {
        let (text, corrections) = resolve_corrections(&lexicon(), "it started... yesterday");
        assert_eq!(text, "it started  yesterday");
        assert!(corrections.is_empty());
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let (text, corrections) = resolve_corrections(&lexicon(), "");
        assert_eq!(text, "");
        assert!(corrections.is_empty());
    }
}
