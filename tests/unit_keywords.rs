// Unit tests for the keyword frequency table.
//
// The ordering contract is the interesting part: count descending with
// ties broken by first occurrence, so the same token stream always
// yields the same table.

use mindmesh::keywords::{top_keywords, KeywordFrequency};

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn pairs(table: &[KeywordFrequency]) -> Vec<(&str, usize)> {
    table.iter().map(|k| (k.keyword.as_str(), k.count)).collect()
}

// ============================================================
// Ordering
// ============================================================

#[test]
fn orders_by_count_descending() {
    let table = top_keywords(&tokens(&["a", "b", "a", "c", "b", "a"]), 2);
    assert_eq!(pairs(&table), vec![("a", 3), ("b", 2)]);
}

#[test]
fn ties_follow_first_occurrence() {
    let table = top_keywords(&tokens(&["x", "y", "x", "y"]), 2);
    assert_eq!(pairs(&table), vec![("x", 2), ("y", 2)]);
}

#[test]
fn all_tied_preserves_source_order() {
    let table = top_keywords(&tokens(&["cc", "bb", "aa", "bb", "cc", "aa"]), 10);
    assert_eq!(pairs(&table), vec![("cc", 2), ("bb", 2), ("aa", 2)]);
}

#[test]
fn higher_count_beats_earlier_first_occurrence() {
    let table = top_keywords(&tokens(&["early", "late", "late"]), 10);
    assert_eq!(pairs(&table), vec![("late", 2), ("early", 1)]);
}

// ============================================================
// Bounds
// ============================================================

#[test]
fn n_zero_returns_empty() {
    assert!(top_keywords(&tokens(&["a", "b"]), 0).is_empty());
}

#[test]
fn empty_tokens_return_empty() {
    assert!(top_keywords(&[], 5).is_empty());
}

#[test]
fn n_larger_than_vocabulary_returns_everything() {
    let table = top_keywords(&tokens(&["a", "b", "a"]), 50);
    assert_eq!(table.len(), 2);
}

#[test]
fn truncates_to_n_entries() {
    let table = top_keywords(&tokens(&["a", "a", "b", "b", "c", "d"]), 3);
    assert_eq!(table.len(), 3);
    assert_eq!(pairs(&table), vec![("a", 2), ("b", 2), ("c", 1)]);
}
