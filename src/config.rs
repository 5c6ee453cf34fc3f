use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::normalize::stopwords::StopwordSet;

/// Central configuration loaded from environment variables.
///
/// Every knob has a documented default matching the primary source
/// behavior; the .env file is loaded automatically at startup via
/// dotenvy.
pub struct Config {
    /// Path to a newline-delimited custom stopword file
    /// (MINDMESH_STOPWORDS; default: the built-in English list).
    pub stopword_file: Option<PathBuf>,
    /// Default keyword table size (MINDMESH_TOP_KEYWORDS, default 10).
    pub top_keywords: usize,
    /// Decimal places for reduction percentages, 0-4
    /// (MINDMESH_PRECISION, default 2).
    pub reduction_precision: u32,
    /// Whether fallback cleaning preserves digit characters
    /// (MINDMESH_FALLBACK_DIGITS, default true).
    pub fallback_keeps_digits: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let top_keywords = match env::var("MINDMESH_TOP_KEYWORDS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("MINDMESH_TOP_KEYWORDS must be a number, got '{v}'"))?,
            Err(_) => 10,
        };

        let reduction_precision: u32 = match env::var("MINDMESH_PRECISION") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("MINDMESH_PRECISION must be a number, got '{v}'"))?,
            Err(_) => 2,
        };
        if reduction_precision > 4 {
            anyhow::bail!(
                "MINDMESH_PRECISION is {reduction_precision}, expected 0-4 decimal places"
            );
        }

        let fallback_keeps_digits = match env::var("MINDMESH_FALLBACK_DIGITS").as_deref() {
            Ok("false") | Ok("0") | Ok("no") => false,
            // unset or anything else keeps the default
            _ => true,
        };

        Ok(Self {
            stopword_file: env::var("MINDMESH_STOPWORDS").ok().map(PathBuf::from),
            top_keywords,
            reduction_precision,
            fallback_keeps_digits,
        })
    }

    /// Build the stopword set this configuration selects: the custom file
    /// when MINDMESH_STOPWORDS is set, the built-in English list
    /// otherwise.
    pub fn stopwords(&self) -> Result<StopwordSet> {
        match &self.stopword_file {
            Some(path) => {
                let contents = std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read stopword file {}", path.display())
                })?;
                let set = StopwordSet::from_words(contents.lines());
                if set.is_empty() {
                    anyhow::bail!(
                        "Stopword file {} contains no words.\n\
                         Expected one word per line; unset MINDMESH_STOPWORDS to use \
                         the built-in English list.",
                        path.display()
                    );
                }
                Ok(set)
            }
            None => Ok(StopwordSet::english()),
        }
    }
}
