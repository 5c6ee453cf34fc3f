// Keyword frequency — occurrence counting over a normalized token stream.
//
// Ordering contract: count descending, ties broken by first occurrence
// in the source sequence. The tie-break is explicit so a table built
// from the same tokens is identical across runs and platforms.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One row of a keyword frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    pub keyword: String,
    pub count: usize,
}

/// Count occurrences in an already-normalized token sequence and return
/// the `n` most frequent entries.
///
/// Ties at the same count keep the order in which the tokens first
/// appeared. Returns an empty table when `n` is 0 or the sequence is
/// empty.
pub fn top_keywords(tokens: &[String], n: usize) -> Vec<KeywordFrequency> {
    if n == 0 || tokens.is_empty() {
        return Vec::new();
    }

    // token -> (count, index of first occurrence)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (i, token) in tokens.iter().enumerate() {
        let entry = counts.entry(token.as_str()).or_insert((0, i));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first_seen))| (token, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(n)
        .map(|(token, count, _)| KeywordFrequency {
            keyword: token.to_string(),
            count,
        })
        .collect()
}
