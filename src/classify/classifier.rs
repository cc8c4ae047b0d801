//! The classification facade.

use std::sync::Arc;

use log::{debug, error};
use rayon::prelude::*;

use crate::analysis::normalizer::{NormalizedText, TextNormalizer};
use crate::classify::error::ClassificationError;
use crate::classify::types::{ClassificationResult, Verdict};
use crate::config::VeritasConfig;
use crate::error::Result;
use crate::explain::{KeywordRanking, KeywordSummarizer};
use crate::heuristic::HeuristicFallback;
use crate::model::{self, ClassifierCapability, ConfidenceEstimator};

/// Validates, normalizes and scores news passages.
///
/// Holds only immutable state, so one instance can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    max_input_length: usize,
    normalizer: TextNormalizer,
    capability: Arc<ClassifierCapability>,
    estimator: ConfidenceEstimator,
    fallback: HeuristicFallback,
    summarizer: KeywordSummarizer,
}

impl Classifier {
    /// Create a classifier with the default configuration.
    pub fn new(capability: ClassifierCapability) -> Result<Self> {
        Self::with_config(&VeritasConfig::default(), capability)
    }

    /// Create a classifier from `config` around an already loaded capability.
    pub fn with_config(config: &VeritasConfig, capability: ClassifierCapability) -> Result<Self> {
        config.validate()?;

        Ok(Classifier {
            max_input_length: config.max_input_length,
            normalizer: TextNormalizer::with_dedup_threshold(config.normalizer.dedup_threshold)?,
            capability: Arc::new(capability),
            estimator: ConfidenceEstimator::new(),
            fallback: HeuristicFallback::new(&config.heuristic),
            summarizer: KeywordSummarizer::new(config.summarizer.top_n),
        })
    }

    /// Create a classifier from `config`, loading the model it names.
    ///
    /// A model that fails to load leaves the classifier on the heuristic path.
    pub fn from_config(config: &VeritasConfig) -> Result<Self> {
        let capability = model::load_capability(&config.model);
        Self::with_config(config, capability)
    }

    /// Classify one passage. Never panics and never returns `Err`: every
    /// rejection is folded into an error result.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        match self.try_classify(text) {
            Ok(result) => result,
            Err(e) => {
                debug!("Rejected classification request: {e}");
                ClassificationResult::from_error(&e)
            }
        }
    }

    /// Classify one passage, returning the rejection reason as an error.
    pub fn try_classify(&self, text: &str) -> std::result::Result<ClassificationResult, ClassificationError> {
        self.validate(text)?;

        let normalized = self.normalizer.normalize(text);
        if normalized.is_empty() {
            return Err(ClassificationError::NormalizationEmpty);
        }
        debug!("Normalized into {} tokens", normalized.len());

        if self.capability.is_absent() {
            let score = self.fallback.classify(text);
            debug!(
                "Heuristic scoring: {} fake / {} real hits",
                score.fake_hits, score.real_hits
            );
            return Ok(ClassificationResult::from_heuristic(&score));
        }

        self.score_with_model(&normalized)
    }

    /// Classify several passages in parallel. Output order follows input order.
    pub fn classify_batch<S>(&self, texts: &[S]) -> Vec<ClassificationResult>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.classify(text.as_ref()))
            .collect()
    }

    /// Up to `top_n` explanation keywords for `text`.
    pub fn summarize_keywords(&self, text: &str) -> Vec<String> {
        self.summarizer.summarize(&self.normalizer.normalize(text))
    }

    /// Full keyword ranking for `text`.
    pub fn rank_keywords(&self, text: &str) -> KeywordRanking {
        self.summarizer.rank(&self.normalizer.normalize(text))
    }

    /// The normalized form of `text` used for scoring.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        self.normalizer.normalize(text)
    }

    pub fn capability(&self) -> &ClassifierCapability {
        &self.capability
    }

    /// Longest accepted input, in characters.
    pub fn max_input_length(&self) -> usize {
        self.max_input_length
    }

    fn validate(&self, text: &str) -> std::result::Result<(), ClassificationError> {
        if text.trim().is_empty() {
            return Err(ClassificationError::EmptyInput);
        }
        let length = text.chars().count();
        if length > self.max_input_length {
            return Err(ClassificationError::InputTooLong {
                length,
                max: self.max_input_length,
            });
        }
        Ok(())
    }

    fn score_with_model(
        &self,
        normalized: &NormalizedText,
    ) -> std::result::Result<ClassificationResult, ClassificationError> {
        let label = self
            .capability
            .predict(&normalized.to_string())
            .map_err(|e| {
                error!("Prediction failed ({}): {e}", self.capability.kind());
                ClassificationError::Prediction(e.to_string())
            })?;
        let confidence = self.estimator.estimate(&self.capability, normalized);
        let verdict = Verdict::from_model_label(&label);
        debug!("Model label '{label}' mapped to {verdict} at {confidence}%");

        Ok(ClassificationResult::from_model(verdict, confidence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VeritasError;
    use crate::model::{MarginPipeline, ProbabilityPipeline, TextPipeline};

    struct Scripted {
        label: &'static str,
        probability: f64,
        fail: bool,
    }

    impl TextPipeline for Scripted {
        fn predict(&self, _text: &str) -> Result<String> {
            if self.fail {
                return Err(VeritasError::model("stage exploded"));
            }
            Ok(self.label.to_string())
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    impl ProbabilityPipeline for Scripted {
        fn predict_proba(&self, _text: &str) -> Result<Vec<f64>> {
            Ok(vec![self.probability, 1.0 - self.probability])
        }
    }

    impl MarginPipeline for Scripted {
        fn decision_function(&self, _text: &str) -> Result<f64> {
            Ok(0.5)
        }
    }

    fn scripted(label: &'static str, probability: f64) -> Classifier {
        Classifier::new(ClassifierCapability::PipelineWithProbability(Arc::new(
            Scripted {
                label,
                probability,
                fail: false,
            },
        )))
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_input() {
        let classifier = Classifier::new(ClassifierCapability::Absent).unwrap();

        for input in ["", "   ", "\n\t"] {
            let result = classifier.classify(input);
            assert!(result.is_error());
            assert_eq!(result.label(), Verdict::Error);
            assert_eq!(result.confidence(), 0.0);
        }
    }

    #[test]
    fn test_rejects_too_long_input() {
        let classifier = Classifier::new(ClassifierCapability::Absent).unwrap();

        let at_limit = "a".repeat(4995) + " hoax";
        assert!(!classifier.classify(&at_limit).is_error());

        let over_limit = "a".repeat(5001);
        assert_eq!(
            classifier.try_classify(&over_limit),
            Err(ClassificationError::InputTooLong {
                length: 5001,
                max: 5000
            })
        );
    }

    #[test]
    fn test_length_counts_characters() {
        let classifier = Classifier::new(ClassifierCapability::Absent).unwrap();

        // 5000 characters, most of them two bytes wide.
        let text = "é".repeat(4990) + " hoax news";
        assert!(text.len() > 5000);
        assert!(!classifier.classify(&text).is_error());
    }

    #[test]
    fn test_rejects_text_empty_after_normalization() {
        let classifier = Classifier::new(ClassifierCapability::Absent).unwrap();
        assert_eq!(
            classifier.try_classify("12345 !!! the and"),
            Err(ClassificationError::NormalizationEmpty)
        );
        assert_eq!(
            classifier.classify("2024").message(),
            "❌ Error: Invalid text after processing"
        );
    }

    #[test]
    fn test_heuristic_path() {
        let classifier = Classifier::new(ClassifierCapability::Absent).unwrap();
        let result = classifier.classify("Aliens run a conspiracy and a hoax, says one report.");

        assert_eq!(result.label(), Verdict::Fake);
        assert_eq!(result.confidence(), 75.0);
        assert_eq!(result.message(), "🚨 Likely Fake News (75.00% confidence)");
    }

    #[test]
    fn test_model_path_label_mapping() {
        for label in ["0", "false", "FAKE", " Fake "] {
            let result = scripted(label, 0.9).classify("The moon landing was staged");
            assert_eq!(result.label(), Verdict::Fake, "label {label}");
            assert_eq!(result.confidence(), 90.0);
        }

        let result = scripted("TRUE", 0.2).classify("The moon landing happened");
        assert_eq!(result.label(), Verdict::Real);
        assert_eq!(result.confidence(), 80.0);
        assert_eq!(result.message(), "✓ Real News Detected (80.00% confidence)");
    }

    #[test]
    fn test_prediction_failure_is_error_result() {
        let classifier = Classifier::new(ClassifierCapability::PipelineWithMargin(Arc::new(
            Scripted {
                label: "FAKE",
                probability: 0.5,
                fail: true,
            },
        )))
        .unwrap();

        let result = classifier.classify("Scientists confirm new findings");
        assert!(result.is_error());
        assert_eq!(
            result.message(),
            "❌ Error: Prediction failed: Model error: stage exploded"
        );
    }

    #[test]
    fn test_classify_batch_preserves_order() {
        let classifier = Classifier::new(ClassifierCapability::Absent).unwrap();
        let texts = vec!["", "hoax hoax", "expert study", "the weather today"];

        let results = classifier.classify_batch(&texts);
        let labels: Vec<Verdict> = results.iter().map(|r| r.label()).collect();
        assert_eq!(
            labels,
            vec![Verdict::Error, Verdict::Fake, Verdict::Real, Verdict::Neutral]
        );
    }

    #[test]
    fn test_summarize_keywords() {
        let classifier = Classifier::new(ClassifierCapability::Absent).unwrap();
        assert_eq!(
            classifier.summarize_keywords("Moon hoax! The moon landing hoax, moon"),
            vec!["moon", "hoax", "landing"]
        );
        assert!(classifier.summarize_keywords("").is_empty());
    }

    #[test]
    fn test_classifier_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Classifier>();
    }
}
