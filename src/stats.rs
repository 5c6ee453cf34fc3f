// Reduction statistics — how much text volume normalization removed.
//
// Word counts compare whitespace segments of the raw input against the
// cleaned token count; character counts compare the raw input against
// the cleaned tokens joined with single spaces.

use serde::{Deserialize, Serialize};

use crate::normalize::normalizer::word_count;

/// Volume metrics for one raw document / cleaned token pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReductionStats {
    pub original_word_count: usize,
    pub original_char_count: usize,
    pub cleaned_word_count: usize,
    pub cleaned_char_count: usize,
    pub word_reduction_pct: f64,
    pub char_reduction_pct: f64,
}

/// Compute reduction statistics for a raw document and its cleaned tokens.
///
/// Percentages are 0.0 when the corresponding original count is 0 (a
/// division policy, not an error) and are rounded to `precision` decimal
/// places. Values are not clamped: joining tokens with separators can
/// make a short document's cleaned form longer than the original, which
/// shows up as a negative reduction.
pub fn reduction_stats(raw_text: &str, tokens: &[String], precision: u32) -> ReductionStats {
    let original_word_count = word_count(raw_text);
    let original_char_count = raw_text.chars().count();
    let cleaned_word_count = tokens.len();
    let cleaned_char_count = joined_char_count(tokens);

    ReductionStats {
        original_word_count,
        original_char_count,
        cleaned_word_count,
        cleaned_char_count,
        word_reduction_pct: reduction_pct(original_word_count, cleaned_word_count, precision),
        char_reduction_pct: reduction_pct(original_char_count, cleaned_char_count, precision),
    }
}

/// Character count of the tokens joined with single spaces, without
/// building the joined string.
fn joined_char_count(tokens: &[String]) -> usize {
    if tokens.is_empty() {
        return 0;
    }
    let chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
    chars + tokens.len() - 1
}

/// Percentage removed going from `original` to `cleaned`.
/// Returns 0.0 when `original` is 0.
fn reduction_pct(original: usize, cleaned: usize, precision: u32) -> f64 {
    if original == 0 {
        return 0.0;
    }
    let pct = (original as f64 - cleaned as f64) / original as f64 * 100.0;
    round_to(pct, precision)
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}
