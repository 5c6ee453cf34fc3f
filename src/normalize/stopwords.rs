// StopwordSet — the injected filter vocabulary for strict normalization.
//
// The source implementations each hardcoded their own stopword list with
// slightly different membership. Here the set is a single immutable value
// built once and handed to the Normalizer at construction, so a run's
// filtering behavior is fully determined by what was injected.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// An immutable set of case-folded words treated as semantically empty.
///
/// Membership checks are exact matches against the folded entries; the
/// set never changes after construction.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The default English set, sourced from the `stop-words` crate.
    pub fn english() -> Self {
        Self::from_words(get(LANGUAGE::English))
    }

    /// Build a custom set from any word iterator (e.g. the lines of a
    /// user-supplied stopword file). Entries are trimmed and case-folded;
    /// empty entries are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// A set that filters nothing.
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Exact membership check. Tokens coming out of the normalizer are
    /// already lowercase, which is what the entries are folded to.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
