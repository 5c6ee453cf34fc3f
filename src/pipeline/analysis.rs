// Document analysis — the two-step cleaning decision plus derived metrics.
//
// The normalizer exposes strict and fallback as independent pure
// functions; this module owns the sequencing: run strict, and only if it
// empties a non-empty input, recover through fallback. The report records
// which policy produced the final text so downstream consumers never have
// to guess.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::keywords::{top_keywords, KeywordFrequency};
use crate::normalize::normalizer::{FallbackResult, Normalizer};
use crate::stats::{reduction_stats, ReductionStats};

/// Which cleaning policy produced a report's final text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningPolicy {
    /// The default aggressive policy.
    Strict,
    /// The permissive recovery policy — strict emptied the input.
    Fallback,
    /// Even fallback found no tokens; the cleaned text is the trimmed
    /// best-effort string and the token list is empty.
    BestEffort,
}

/// The full result of one analysis run.
///
/// Plain serializable values only — no references back into the
/// normalizer, safe to hand to any renderer or downstream service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub policy: CleaningPolicy,
    pub cleaned_text: String,
    pub tokens: Vec<String>,
    pub stats: ReductionStats,
    pub keywords: Vec<KeywordFrequency>,
}

/// Run the full cleaning pipeline on a raw document.
///
/// `top_n` bounds the keyword table; `precision` sets the reduction
/// rounding. Empty or whitespace-only input produces an empty
/// strict-policy report rather than an error — there is nothing to
/// recover in that case, so fallback is not attempted.
pub fn analyze(
    normalizer: &Normalizer,
    raw_text: &str,
    top_n: usize,
    precision: u32,
) -> AnalysisReport {
    let strict_tokens = normalizer.normalize_strict(raw_text);

    let (policy, tokens, cleaned_text) = if !strict_tokens.is_empty()
        || raw_text.trim().is_empty()
    {
        let cleaned = strict_tokens.join(" ");
        (CleaningPolicy::Strict, strict_tokens, cleaned)
    } else {
        debug!("strict policy emptied a non-empty input, recovering via fallback");
        match normalizer.normalize_fallback(raw_text) {
            FallbackResult::Tokens(tokens) => {
                let cleaned = tokens.join(" ");
                (CleaningPolicy::Fallback, tokens, cleaned)
            }
            FallbackResult::BestEffort(text) => (CleaningPolicy::BestEffort, Vec::new(), text),
        }
    };

    // On the best-effort path the cleaned text is a plain string rather
    // than a token stream; reduction is measured against its segments so
    // the stats describe what the caller actually receives.
    let stats = match policy {
        CleaningPolicy::BestEffort => {
            let segments: Vec<String> = cleaned_text
                .split_whitespace()
                .map(str::to_string)
                .collect();
            reduction_stats(raw_text, &segments, precision)
        }
        _ => reduction_stats(raw_text, &tokens, precision),
    };
    let keywords = top_keywords(&tokens, top_n);

    info!(
        policy = ?policy,
        tokens = tokens.len(),
        word_reduction_pct = stats.word_reduction_pct,
        "analysis complete"
    );

    AnalysisReport {
        policy,
        cleaned_text,
        tokens,
        stats,
        keywords,
    }
}

/// Just the cleaned token stream, with the same strict-then-fallback
/// sequencing as [`analyze`]. The best-effort outcome has no tokens and
/// yields an empty sequence.
pub fn cleaned_tokens(normalizer: &Normalizer, raw_text: &str) -> Vec<String> {
    let strict = normalizer.normalize_strict(raw_text);
    if !strict.is_empty() || raw_text.trim().is_empty() {
        return strict;
    }
    match normalizer.normalize_fallback(raw_text) {
        FallbackResult::Tokens(tokens) => tokens,
        FallbackResult::BestEffort(_) => Vec::new(),
    }
}
