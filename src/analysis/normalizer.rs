//! Deterministic text normalization for classification.
//!
//! [`TextNormalizer`] wraps a [`NewsAnalyzer`] and turns a raw passage into a
//! [`NormalizedText`]: the ordered lemmas that survive cleanup, stop word
//! removal and bounded deduplication. Normalization is total. Any analysis
//! failure is logged and yields an empty result.
//!
//! # Examples
//!
//! ```
//! use veritas::analysis::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new().unwrap();
//! let normalized = normalizer.normalize("Aliens built the pyramids!!!");
//!
//! assert_eq!(normalized.to_string(), "alien built pyramid");
//! ```

use std::fmt;
use std::sync::Arc;

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::news::NewsAnalyzer;
use crate::error::Result;

/// Ordered lemma tokens derived from a passage.
///
/// Contains no stop words. Duplicates appear only under the bounded-dedup
/// rule of the analysis chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedText {
    tokens: Vec<String>,
}

impl NormalizedText {
    /// An empty normalized text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a normalized text from already-normalized tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NormalizedText {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// The lemma tokens in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no token survived normalization.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

/// Turns raw passages into [`NormalizedText`].
#[derive(Clone)]
pub struct TextNormalizer {
    analyzer: Arc<dyn Analyzer>,
}

impl TextNormalizer {
    /// Create a normalizer with the default news analysis chain.
    pub fn new() -> Result<Self> {
        Ok(Self::with_analyzer(Arc::new(NewsAnalyzer::new()?)))
    }

    /// Create a normalizer whose dedup filter uses `threshold`.
    pub fn with_dedup_threshold(threshold: usize) -> Result<Self> {
        Ok(Self::with_analyzer(Arc::new(
            NewsAnalyzer::with_dedup_threshold(threshold)?,
        )))
    }

    /// Create a normalizer backed by a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        TextNormalizer { analyzer }
    }

    /// Normalize `raw`, returning an empty text if analysis fails.
    pub fn normalize(&self, raw: &str) -> NormalizedText {
        match self.try_normalize(raw) {
            Ok(normalized) => normalized,
            Err(e) => {
                error!("Preprocessing error: {e}");
                NormalizedText::empty()
            }
        }
    }

    /// Normalize `raw`, surfacing analysis errors.
    pub fn try_normalize(&self, raw: &str) -> Result<NormalizedText> {
        let tokens: Vec<String> = self.analyzer.analyze(raw)?.map(|token| token.text).collect();
        debug!(
            "normalized {} chars into {} tokens with '{}'",
            raw.chars().count(),
            tokens.len(),
            self.analyzer.name()
        );
        Ok(NormalizedText { tokens })
    }
}

impl fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
