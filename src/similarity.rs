// Cosine similarity between cleaned documents.
//
// Each document becomes a term-weight vector (relative token frequency);
// similarity is the cosine of the two vectors over the union of their
// vocabularies:
//
//   dot(a, b) / (|a| * |b|)
//
// This gives 0.0 for documents with no shared vocabulary and 1.0 for
// identical token distributions.

use std::collections::{HashMap, HashSet};

/// Relative-frequency term weights for a normalized token sequence.
///
/// Weights sum to 1.0 for non-empty input; an empty sequence gives an
/// empty map.
pub fn term_weights(tokens: &[String]) -> HashMap<String, f64> {
    let mut weights = HashMap::new();
    if tokens.is_empty() {
        return weights;
    }
    let per_token = 1.0 / tokens.len() as f64;
    for token in tokens {
        *weights.entry(token.clone()).or_insert(0.0) += per_token;
    }
    weights
}

/// Cosine similarity between two normalized token sequences.
pub fn cosine_similarity(tokens_a: &[String], tokens_b: &[String]) -> f64 {
    cosine_from_weights(&term_weights(tokens_a), &term_weights(tokens_b))
}

/// Compute cosine similarity from raw term-weight maps.
///
/// Separated from `cosine_similarity` so it can be used with ad-hoc
/// weight maps. Returns 0.0 when either vector has (near-)zero
/// magnitude; the result is clamped to [0.0, 1.0].
pub fn cosine_from_weights(
    weights_a: &HashMap<String, f64>,
    weights_b: &HashMap<String, f64>,
) -> f64 {
    let all_keys: HashSet<&String> = weights_a.keys().chain(weights_b.keys()).collect();
    if all_keys.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0;
    let mut mag_a = 0.0;
    let mut mag_b = 0.0;

    for key in all_keys {
        let a = weights_a.get(key).copied().unwrap_or(0.0);
        let b = weights_b.get(key).copied().unwrap_or(0.0);
        dot += a * b;
        mag_a += a * a;
        mag_b += b * b;
    }

    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        return 0.0;
    }
    (dot / denom).clamp(0.0, 1.0)
}
