//! Keyword extraction: lowercase, split on whitespace/commas/periods, then drop
//! stopwords and tokens of three characters or fewer.

use std::collections::{BTreeSet, HashSet};

/// Common English function words never treated as keywords.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "a", "an", "in", "on", "at", "for", "to", "of", "and", "or", "with", "is", "are",
    "was", "were", "been", "be", "have", "has", "had", "do", "does", "did", "will", "would",
    "should", "could", "may", "might", "must",
];

/// Tokens must be strictly longer than this many characters.
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Ordered so that sampling "the first N" keywords is deterministic.
pub type KeywordSet = BTreeSet<String>;

#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stopwords: HashSet<String>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS.iter().copied())
    }
}

impl KeywordExtractor {
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn extract(&self, text: &str) -> KeywordSet {
        text.to_lowercase()
            .split(|c: char| c == ',' || c == '.' || c.is_whitespace())
            .filter(|token| token.chars().count() > MIN_KEYWORD_CHARS)
            .filter(|token| !self.stopwords.contains(*token))
            .map(str::to_string)
            .collect()
    }
}
