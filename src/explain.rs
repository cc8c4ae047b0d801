//! Keyword explanations for a classification.
//!
//! Tokens are ranked by descending frequency, then descending length in
//! characters, then ascending lexicographic order.

use std::cmp::Ordering;

use ahash::AHashMap;
use serde::Serialize;

use crate::analysis::normalizer::NormalizedText;
use crate::config::DEFAULT_TOP_KEYWORDS;

/// A token and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordScore {
    pub token: String,
    pub count: usize,
}

/// Tokens of a normalized text in ranking order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordRanking {
    entries: Vec<KeywordScore>,
}

impl KeywordRanking {
    pub fn entries(&self) -> &[KeywordScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first `n` tokens.
    pub fn top(&self, n: usize) -> Vec<String> {
        self.entries
            .iter()
            .take(n)
            .map(|entry| entry.token.clone())
            .collect()
    }
}

/// Ranks normalized tokens by frequency.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSummarizer {
    top_n: usize,
}

impl Default for KeywordSummarizer {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_KEYWORDS)
    }
}

impl KeywordSummarizer {
    pub fn new(top_n: usize) -> Self {
        KeywordSummarizer { top_n }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Full ranking of the distinct tokens.
    pub fn rank(&self, normalized: &NormalizedText) -> KeywordRanking {
        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        for token in normalized.tokens() {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }

        let mut entries: Vec<KeywordScore> = counts
            .into_iter()
            .map(|(token, count)| KeywordScore {
                token: token.to_string(),
                count,
            })
            .collect();
        entries.sort_by(Self::ranking_order);

        KeywordRanking { entries }
    }

    /// At most `top_n` tokens in ranking order; empty for empty text.
    pub fn summarize(&self, normalized: &NormalizedText) -> Vec<String> {
        self.rank(normalized).top(self.top_n)
    }

    fn ranking_order(a: &KeywordScore, b: &KeywordScore) -> Ordering {
        b.count
            .cmp(&a.count)
            .then_with(|| b.token.chars().count().cmp(&a.token.chars().count()))
            .then_with(|| a.token.cmp(&b.token))
    }
}
