//! # Veritas
//!
//! Fake news detection for short news passages.
//!
//! A passage is validated, normalized into lemmas and scored by a trained
//! linear classifier when one is loaded. Without a model, a keyword heuristic
//! gives the verdict. Every verdict carries a confidence percentage and a
//! short keyword explanation.
//!
//! ```
//! use veritas::prelude::*;
//!
//! let classifier = Classifier::new(ClassifierCapability::Absent).unwrap();
//! let result = classifier.classify("Experts published new research data");
//!
//! assert_eq!(result.label(), Verdict::Real);
//! assert_eq!(classifier.summarize_keywords("moon hoax moon"), vec!["moon", "hoax"]);
//! ```

pub mod analysis;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod explain;
pub mod heuristic;
pub mod history;
pub mod model;
pub mod util;

pub mod prelude {
    pub use crate::analysis::{NormalizedText, TextNormalizer};
    pub use crate::classify::{ClassificationError, ClassificationResult, Classifier, Verdict};
    pub use crate::config::{MAX_INPUT_LENGTH, VeritasConfig};
    pub use crate::error::{Result, VeritasError};
    pub use crate::explain::{KeywordRanking, KeywordSummarizer};
    pub use crate::heuristic::HeuristicFallback;
    pub use crate::history::PredictionHistory;
    pub use crate::model::{ClassifierCapability, ConfidenceEstimator, load_capability};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
