//! Classifier capabilities.
//!
//! A loaded classifier exposes one of a closed set of interfaces. Confidence
//! extraction and prediction dispatch on [`ClassifierCapability`] by `match`,
//! so adding an interface means adding a variant and handling it everywhere.

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, VeritasError};
use crate::model::tfidf::TfIdfVectorizer;

/// A composed pipeline that accepts normalized text directly.
pub trait TextPipeline: Send + Sync {
    /// Predict the raw class label for a normalized passage.
    fn predict(&self, text: &str) -> Result<String>;

    /// Get the name of this pipeline for debugging and logging.
    fn name(&self) -> &str;
}

/// A pipeline whose final stage reports class probabilities.
pub trait ProbabilityPipeline: TextPipeline {
    /// Per-class probabilities for a normalized passage.
    fn predict_proba(&self, text: &str) -> Result<Vec<f64>>;
}

/// A pipeline whose final stage reports a signed decision margin.
pub trait MarginPipeline: TextPipeline {
    /// Signed distance to the decision boundary for a normalized passage.
    fn decision_function(&self, text: &str) -> Result<f64>;
}

/// A classifier that operates on feature vectors produced elsewhere.
pub trait FeatureClassifier: Send + Sync {
    /// Predict the raw class label for a feature vector.
    fn predict_features(&self, features: &[f64]) -> Result<String>;

    /// Per-class probabilities for a feature vector.
    fn predict_proba_features(&self, features: &[f64]) -> Result<Vec<f64>>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}

/// What the loaded classifier can do. Loaded once, never mutated.
#[derive(Clone, Default)]
pub enum ClassifierCapability {
    /// A pipeline with a probabilistic classification stage.
    PipelineWithProbability(Arc<dyn ProbabilityPipeline>),
    /// A pipeline with a margin-producing classification stage.
    PipelineWithMargin(Arc<dyn MarginPipeline>),
    /// A probabilistic classifier paired with a separately fitted vectorizer.
    StandaloneProbability {
        classifier: Arc<dyn FeatureClassifier>,
        vectorizer: Arc<TfIdfVectorizer>,
    },
    /// No trained classifier; the heuristic fallback is used.
    #[default]
    Absent,
}

impl ClassifierCapability {
    /// Whether no trained classifier is loaded.
    pub fn is_absent(&self) -> bool {
        matches!(self, ClassifierCapability::Absent)
    }

    /// Short name of the variant, for logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            ClassifierCapability::PipelineWithProbability(_) => "pipeline_with_probability",
            ClassifierCapability::PipelineWithMargin(_) => "pipeline_with_margin",
            ClassifierCapability::StandaloneProbability { .. } => "standalone_probability",
            ClassifierCapability::Absent => "absent",
        }
    }

    /// Predict the raw label for a normalized passage.
    pub fn predict(&self, text: &str) -> Result<String> {
        match self {
            ClassifierCapability::PipelineWithProbability(pipeline) => pipeline.predict(text),
            ClassifierCapability::PipelineWithMargin(pipeline) => pipeline.predict(text),
            ClassifierCapability::StandaloneProbability {
                classifier,
                vectorizer,
            } => {
                let features = vectorizer.transform(text)?;
                classifier.predict_features(&features)
            }
            ClassifierCapability::Absent => Err(VeritasError::model("no classifier loaded")),
        }
    }
}

impl fmt::Debug for ClassifierCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierCapability::PipelineWithProbability(pipeline) => f
                .debug_tuple("PipelineWithProbability")
                .field(&pipeline.name())
                .finish(),
            ClassifierCapability::PipelineWithMargin(pipeline) => f
                .debug_tuple("PipelineWithMargin")
                .field(&pipeline.name())
                .finish(),
            ClassifierCapability::StandaloneProbability {
                classifier,
                vectorizer,
            } => f
                .debug_struct("StandaloneProbability")
                .field("classifier", &classifier.name())
                .field("vectorizer", vectorizer)
                .finish(),
            ClassifierCapability::Absent => f.write_str("Absent"),
        }
    }
}
