//! Configuration for the classifier facade and its components.
//!
//! Every section has a `Default` that reproduces the stock behaviour, so an
//! empty JSON object (`{}`) is a valid configuration file.
//!
//! # Example
//!
//! ```
//! use veritas::config::VeritasConfig;
//!
//! let config = VeritasConfig::builder()
//!     .top_keywords(3)
//!     .fake_threshold(70.0)
//!     .build();
//!
//! assert_eq!(config.summarizer.top_n, 3);
//! assert_eq!(config.max_input_length, 5000);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VeritasError};

/// Maximum number of characters accepted by the classifier facade.
pub const MAX_INPUT_LENGTH: usize = 5000;

/// Number of distinct lemmas emitted before repeated lemmas start being dropped.
pub const DEFAULT_DEDUP_THRESHOLD: usize = 5;

/// Default number of explanation keywords.
pub const DEFAULT_TOP_KEYWORDS: usize = 5;

/// Fake-share percentage above which the heuristic answers "fake".
pub const DEFAULT_FAKE_THRESHOLD: f64 = 60.0;

const DEFAULT_FAKE_KEYWORDS: &[&str] = &[
    "flat earth",
    "aliens",
    "conspiracy",
    "hoax",
    "fake",
    "mind control",
    "lying",
    "secret",
    "false",
    "not real",
];

const DEFAULT_REAL_KEYWORDS: &[&str] = &[
    "research",
    "study",
    "announce",
    "report",
    "investigation",
    "expert",
    "data",
    "evidence",
    "fact",
    "official",
    "organization",
];

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VeritasConfig {
    /// Inputs longer than this (in characters) are rejected.
    pub max_input_length: usize,
    pub normalizer: NormalizerConfig,
    pub heuristic: HeuristicConfig,
    pub summarizer: SummarizerConfig,
    pub model: ModelConfig,
}

impl Default for VeritasConfig {
    fn default() -> Self {
        VeritasConfig {
            max_input_length: MAX_INPUT_LENGTH,
            normalizer: NormalizerConfig::default(),
            heuristic: HeuristicConfig::default(),
            summarizer: SummarizerConfig::default(),
            model: ModelConfig::default(),
        }
    }
}

impl VeritasConfig {
    /// Create a new builder starting from the defaults.
    pub fn builder() -> VeritasConfigBuilder {
        VeritasConfigBuilder::new()
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: VeritasConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.max_input_length == 0 {
            return Err(VeritasError::config("max_input_length must be positive"));
        }
        if self.summarizer.top_n == 0 {
            return Err(VeritasError::config("summarizer.top_n must be positive"));
        }
        let threshold = self.heuristic.fake_threshold;
        if !(0.0..=100.0).contains(&threshold) {
            return Err(VeritasError::config(format!(
                "heuristic.fake_threshold must be within [0, 100], got {threshold}"
            )));
        }
        if self
            .heuristic
            .fake_keywords
            .iter()
            .chain(&self.heuristic.real_keywords)
            .any(|kw| kw.is_empty())
        {
            return Err(VeritasError::config("heuristic keywords must not be empty"));
        }
        Ok(())
    }
}

/// Text normalization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Distinct-lemma count below which repeats are still emitted.
    pub dedup_threshold: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        NormalizerConfig {
            dedup_threshold: DEFAULT_DEDUP_THRESHOLD,
        }
    }
}

/// Keyword fallback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    pub fake_keywords: Vec<String>,
    pub real_keywords: Vec<String>,
    /// Percentage of fake hits that must be exceeded to answer "fake".
    pub fake_threshold: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        HeuristicConfig {
            fake_keywords: DEFAULT_FAKE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            real_keywords: DEFAULT_REAL_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            fake_threshold: DEFAULT_FAKE_THRESHOLD,
        }
    }
}

/// Keyword explanation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    pub top_n: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        SummarizerConfig {
            top_n: DEFAULT_TOP_KEYWORDS,
        }
    }
}

/// Where to find the trained classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the serialized classifier artifact.
    pub model_path: Option<PathBuf>,
    /// Corpus used to fit the vectorizer of a standalone classifier.
    pub vectorizer_corpus: Option<PathBuf>,
}

/// Builder for [`VeritasConfig`].
#[derive(Debug, Clone, Default)]
pub struct VeritasConfigBuilder {
    config: VeritasConfig,
}

impl VeritasConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum accepted input length.
    pub fn max_input_length(mut self, max: usize) -> Self {
        self.config.max_input_length = max;
        self
    }

    /// Set the bounded-dedup threshold.
    pub fn dedup_threshold(mut self, threshold: usize) -> Self {
        self.config.normalizer.dedup_threshold = threshold;
        self
    }

    /// Set the number of explanation keywords.
    pub fn top_keywords(mut self, top_n: usize) -> Self {
        self.config.summarizer.top_n = top_n;
        self
    }

    /// Set the heuristic fake threshold (percentage).
    pub fn fake_threshold(mut self, threshold: f64) -> Self {
        self.config.heuristic.fake_threshold = threshold;
        self
    }

    /// Replace the heuristic keyword lists.
    pub fn keywords<F, R, S>(mut self, fake: F, real: R) -> Self
    where
        F: IntoIterator<Item = S>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.heuristic.fake_keywords = fake.into_iter().map(Into::into).collect();
        self.config.heuristic.real_keywords = real.into_iter().map(Into::into).collect();
        self
    }

    /// Set the classifier artifact path.
    pub fn model_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.model.model_path = Some(path.into());
        self
    }

    /// Set the vectorizer corpus path.
    pub fn vectorizer_corpus<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.model.vectorizer_corpus = Some(path.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> VeritasConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VeritasConfig::default();
        assert_eq!(config.max_input_length, 5000);
        assert_eq!(config.normalizer.dedup_threshold, 5);
        assert_eq!(config.summarizer.top_n, 5);
        assert_eq!(config.heuristic.fake_threshold, 60.0);
        assert_eq!(config.heuristic.fake_keywords.len(), 10);
        assert_eq!(config.heuristic.real_keywords.len(), 11);
        assert!(config.model.model_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: VeritasConfig =
            serde_json::from_str(r#"{"summarizer": {"top_n": 3}}"#).unwrap();
        assert_eq!(config.summarizer.top_n, 3);
        assert_eq!(config.max_input_length, MAX_INPUT_LENGTH);
        assert_eq!(config.heuristic.fake_keywords[0], "flat earth");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = VeritasConfig::builder().fake_threshold(120.0).build();
        assert!(config.validate().is_err());

        let config = VeritasConfig::builder().top_keywords(0).build();
        assert!(config.validate().is_err());

        let config = VeritasConfig::builder()
            .keywords(vec!["hoax", ""], vec!["study"])
            .build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("veritas.json");
        std::fs::write(&path, r#"{"max_input_length": 200, "model": {"model_path": "m.json"}}"#)
            .unwrap();

        let config = VeritasConfig::from_file(&path).unwrap();
        assert_eq!(config.max_input_length, 200);
        assert_eq!(config.model.model_path, Some(PathBuf::from("m.json")));
    }
}
