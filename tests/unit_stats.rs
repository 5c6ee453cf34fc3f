// Unit tests for reduction statistics.
//
// Edge cases under test: zero-division policy for empty originals,
// rounding precision knob, and the documented negative-reduction case
// where joining tokens makes the cleaned form longer than the original.

use mindmesh::normalize::normalizer::Normalizer;
use mindmesh::normalize::stopwords::StopwordSet;
use mindmesh::stats::reduction_stats;

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn empty_original_yields_zero_percentages() {
    let stats = reduction_stats("", &[], 2);
    assert_eq!(stats.original_word_count, 0);
    assert_eq!(stats.original_char_count, 0);
    assert_eq!(stats.word_reduction_pct, 0.0);
    assert_eq!(stats.char_reduction_pct, 0.0);
}

#[test]
fn whitespace_only_original_has_chars_but_no_words() {
    let stats = reduction_stats("   ", &[], 2);
    assert_eq!(stats.original_word_count, 0);
    assert_eq!(stats.original_char_count, 3);
    assert_eq!(stats.word_reduction_pct, 0.0);
    // all 3 chars removed
    assert_eq!(stats.char_reduction_pct, 100.0);
}

#[test]
fn halving_words_and_chars() {
    // 6 raw words / 22 chars -> 3 tokens joined as 11 chars.
    let stats = reduction_stats(
        "the cat sat on the mat",
        &tokens(&["cat", "sat", "mat"]),
        2,
    );
    assert_eq!(stats.cleaned_word_count, 3);
    assert_eq!(stats.cleaned_char_count, 11);
    assert_eq!(stats.word_reduction_pct, 50.0);
    assert_eq!(stats.char_reduction_pct, 50.0);
}

#[test]
fn precision_knob_controls_rounding() {
    // (3 - 1) / 3 * 100 = 66.666...
    let raw = "aa bb cc";
    let cleaned = tokens(&["aa"]);
    assert_eq!(reduction_stats(raw, &cleaned, 2).word_reduction_pct, 66.67);
    assert_eq!(reduction_stats(raw, &cleaned, 0).word_reduction_pct, 67.0);
}

#[test]
fn negative_word_reduction_when_symbols_split_one_segment() {
    // "ab.cd" is one whitespace segment but cleans into two tokens, so
    // the word "reduction" goes negative. Not clamped, by design of the
    // stats contract.
    let normalizer = Normalizer::new(StopwordSet::none());
    let raw = "ab.cd";
    let cleaned = normalizer.normalize_strict(raw);
    assert_eq!(cleaned, tokens(&["ab", "cd"]));

    let stats = reduction_stats(raw, &cleaned, 2);
    assert_eq!(stats.original_word_count, 1);
    assert_eq!(stats.cleaned_word_count, 2);
    assert_eq!(stats.word_reduction_pct, -100.0);
    // joined "ab cd" is 5 chars, same as the original
    assert_eq!(stats.char_reduction_pct, 0.0);
}

#[test]
fn char_counts_are_characters_not_bytes() {
    let stats = reduction_stats("héllo", &tokens(&["h", "llo"]), 2);
    assert_eq!(stats.original_char_count, 5);
    // "h llo" -> 5 chars
    assert_eq!(stats.cleaned_char_count, 5);
    assert_eq!(stats.char_reduction_pct, 0.0);
}
