// Text normalization — stopword sets and the strict/fallback cleaning policies.

pub mod normalizer;
pub mod stopwords;
