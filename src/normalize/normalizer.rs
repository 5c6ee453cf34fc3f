// The cleaning policies — strict by default, fallback as recovery.
//
// Both policies are pure functions of the input string and the knobs
// fixed at construction: no I/O, no shared mutable state, no error path
// for any string input. Sequencing — strict first, fallback only when
// strict empties a non-empty input — belongs to the caller (see
// pipeline::analysis).

use std::sync::LazyLock;

use regex_lite::Regex;

use super::stopwords::StopwordSet;

// Strict policy: anything that is not a lowercase ASCII letter or
// whitespace becomes a single space, so unrelated tokens never merge
// across a removed symbol.
static NON_ALPHA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z\s]").unwrap());

// Fallback policy keeps digits (when enabled) in addition to letters.
static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());

// Runs of control whitespace collapse to one space before symbol
// replacement in the fallback path.
static CONTROL_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n\t]+").unwrap());

/// Outcome of the fallback policy.
///
/// Either a surviving token sequence, or — when even permissive
/// tokenization finds nothing — the whitespace-collapsed, trimmed
/// remnant of the input as a single best-effort string. Never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackResult {
    Tokens(Vec<String>),
    BestEffort(String),
}

impl FallbackResult {
    /// The token sequence, if this outcome produced one.
    pub fn tokens(&self) -> Option<&[String]> {
        match self {
            FallbackResult::Tokens(tokens) => Some(tokens),
            FallbackResult::BestEffort(_) => None,
        }
    }
}

/// Converts raw extracted text into a canonical token sequence.
///
/// Holds only the injected stopword set and behavior knobs, all fixed at
/// construction — calls are independently safe to run in parallel.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: StopwordSet,
    fallback_keeps_digits: bool,
}

impl Normalizer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self {
            stopwords,
            fallback_keeps_digits: true,
        }
    }

    /// Set whether the fallback policy preserves digit characters inside
    /// mixed tokens (default true). All-digit tokens are dropped either
    /// way; with this off, digits are replaced like any other symbol.
    pub fn fallback_keeps_digits(mut self, keep: bool) -> Self {
        self.fallback_keeps_digits = keep;
        self
    }

    /// The default aggressive cleaning policy.
    ///
    /// Lowercases, strips apostrophes without inserting a separator (so
    /// "don't" collapses to "dont"), replaces every remaining
    /// non-letter with a space, then drops stopwords and single-character
    /// tokens. Surviving tokens keep their first-occurrence order, with
    /// duplicates retained.
    ///
    /// The result is empty exactly when every token was filtered out or
    /// the input was empty/whitespace-only.
    pub fn normalize_strict(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let lowered = text.to_lowercase().replace('\'', "");
        let spaced = NON_ALPHA.replace_all(&lowered, " ");
        spaced
            .split_whitespace()
            .filter(|t| t.len() > 1 && !self.stopwords.contains(t))
            .map(str::to_string)
            .collect()
    }

    /// The permissive recovery policy.
    ///
    /// Intended for inputs the strict policy destroys entirely (numeric
    /// or symbol-heavy text). Keeps digits inside mixed tokens (see
    /// [`Self::fallback_keeps_digits`]), drops purely numeric and
    /// single-character tokens, and skips stopword filtering altogether.
    /// When nothing survives, returns the whitespace-collapsed remnant as
    /// [`FallbackResult::BestEffort`] so callers always get something
    /// inspectable back.
    pub fn normalize_fallback(&self, text: &str) -> FallbackResult {
        if text.is_empty() {
            return FallbackResult::Tokens(Vec::new());
        }
        let lowered = text.to_lowercase();
        let collapsed = CONTROL_RUNS.replace_all(&lowered, " ");
        let spaced = if self.fallback_keeps_digits {
            NON_ALNUM.replace_all(&collapsed, " ")
        } else {
            NON_ALPHA.replace_all(&collapsed, " ")
        };

        let tokens: Vec<String> = spaced
            .split_whitespace()
            .filter(|t| !t.bytes().all(|b| b.is_ascii_digit()))
            .filter(|t| t.len() > 1)
            .map(str::to_string)
            .collect();

        if tokens.is_empty() {
            let best_effort = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
            FallbackResult::BestEffort(best_effort)
        } else {
            FallbackResult::Tokens(tokens)
        }
    }
}

/// Count of whitespace-delimited segments in the raw input; 0 for empty
/// text. No normalization is applied — this measures raw input size
/// independent of any cleaning policy.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer_with(words: &[&str]) -> Normalizer {
        Normalizer::new(StopwordSet::from_words(words.iter().copied()))
    }

    #[test]
    fn strict_collapses_contractions() {
        let n = normalizer_with(&["stop"]);
        assert_eq!(n.normalize_strict("don't stop"), vec!["dont"]);
    }

    #[test]
    fn strict_symbol_replacement_keeps_tokens_apart() {
        let n = normalizer_with(&[]);
        // "alpha-beta" must not merge into "alphabeta"
        assert_eq!(n.normalize_strict("alpha-beta"), vec!["alpha", "beta"]);
    }

    #[test]
    fn fallback_keeps_mixed_tokens_drops_pure_numbers() {
        let n = normalizer_with(&[]);
        assert_eq!(
            n.normalize_fallback("room 42 on deck b2"),
            FallbackResult::Tokens(vec![
                "room".to_string(),
                "on".to_string(),
                "deck".to_string(),
                "b2".to_string()
            ])
        );
    }

    #[test]
    fn fallback_numeric_only_input_returns_best_effort() {
        let n = normalizer_with(&[]);
        assert_eq!(
            n.normalize_fallback("123 456 789"),
            FallbackResult::BestEffort("123 456 789".to_string())
        );
    }

    #[test]
    fn word_count_counts_raw_segments() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  \n "), 0);
        assert_eq!(word_count("one two\tthree"), 3);
    }
}
