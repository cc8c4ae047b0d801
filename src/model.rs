//! Trained classifier support.
//!
//! - [`ClassifierCapability`]: the closed set of interfaces a loaded classifier can expose
//! - [`ConfidenceEstimator`]: percentage confidence from any capability
//! - [`TfIdfVectorizer`] and [`LinearModel`]: the feature extraction and linear stages
//! - [`load_capability`]: startup loading from a JSON artifact
//!
//! # Example
//!
//! ```rust,no_run
//! use veritas::analysis::NormalizedText;
//! use veritas::config::ModelConfig;
//! use veritas::model::{self, ConfidenceEstimator};
//!
//! let config = ModelConfig {
//!     model_path: Some("model.json".into()),
//!     vectorizer_corpus: None,
//! };
//! let capability = model::load_capability(&config);
//!
//! let text = NormalizedText::from_tokens(["moon", "landing", "hoax"]);
//! let confidence = ConfidenceEstimator::new().estimate(&capability, &text);
//! assert!((0.0..=100.0).contains(&confidence));
//! ```

mod capability;
mod confidence;
mod linear;
mod loader;
mod tfidf;

pub use capability::{
    ClassifierCapability, FeatureClassifier, MarginPipeline, ProbabilityPipeline, TextPipeline,
};
pub use confidence::{ConfidenceEstimator, NEUTRAL_CONFIDENCE};
pub use linear::{LinearModel, LinearPipeline, Loss};
pub use loader::{CORPUS_COLUMN, ModelArtifact, load_capability, load_corpus, try_load_capability};
pub use tfidf::{TfIdfVectorizer, term_analyzer};
