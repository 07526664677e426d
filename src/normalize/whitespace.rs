//! Final cosmetic cleanup.
//!
//! Runs after every removal/replacement stage so double spacing and
//! orphaned punctuation never leak into entity matching downstream. No
//! semantic decisions are made here.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SPACE_BEFORE_PUNCT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+([,.?!])").unwrap());
static REPEATED_COMMAS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",+").unwrap());
static REPEATED_PERIODS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{2,}").unwrap());

/// Collapse removal residue into valid spacing and punctuation.
pub fn normalize_whitespace(text: &str) -> String {
    let text = WHITESPACE_RUNS.replace_all(text, " ");
    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "$1");
    let text = REPEATED_COMMAS.replace_all(&text, ",");
    let text = REPEATED_PERIODS.replace_all(&text, ".");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize_whitespace("a   b\t c"), "a b c");
    }

    #[test]
    fn removes_space_before_punctuation() {
        assert_eq!(normalize_whitespace("hurts , a lot ."), "hurts, a lot.");
        assert_eq!(normalize_whitespace("really ?"), "really?");
    }

    #[test]
    fn collapses_repeated_commas_and_periods() {
        assert_eq!(normalize_whitespace("a,, b"), "a, b");
        assert_eq!(normalize_whitespace("done.."), "done.");
    }

    #[test]
    fn trims_ends() {
        assert_eq!(normalize_whitespace("  hello  "), "hello");
    }

    #[test]
    fn is_idempotent() {
        let messy = "  my knee ,, hurts ...  a lot  ! ";
        let once = normalize_whitespace(messy);
        let twice = normalize_whitespace(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace("   "), "");
    }
}
