//! Bounded deduplication filter.
//!
//! Tracks the set of token texts already emitted. A token is emitted when its
//! text has not been seen before, or when fewer than `threshold` distinct
//! texts have been emitted so far. Once the threshold is reached only new
//! texts pass. Early repeats therefore survive while later repeats are
//! dropped.

use ahash::AHashSet;

use super::Filter;
use crate::analysis::token::{Token, TokenStream};
use crate::config::DEFAULT_DEDUP_THRESHOLD;
use crate::error::Result;

/// A filter that drops repeated tokens once enough distinct ones were emitted.
#[derive(Clone, Debug)]
pub struct BoundedDedupFilter {
    threshold: usize,
}

impl BoundedDedupFilter {
    /// Create a new filter with the given distinct-token threshold.
    pub fn new(threshold: usize) -> Self {
        BoundedDedupFilter { threshold }
    }

    /// Get the threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Default for BoundedDedupFilter {
    fn default() -> Self {
        Self::new(DEFAULT_DEDUP_THRESHOLD)
    }
}

impl Filter for BoundedDedupFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut seen: AHashSet<String> = AHashSet::new();
        let mut filtered_tokens: Vec<Token> = Vec::new();

        for token in tokens {
            if !seen.contains(&token.text) || seen.len() < self.threshold {
                seen.insert(token.text.clone());
                filtered_tokens.push(token);
            }
        }

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "bounded_dedup"
    }
}
