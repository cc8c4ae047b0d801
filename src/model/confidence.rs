//! Confidence extraction across classifier capabilities.

use log::warn;

use crate::analysis::normalizer::NormalizedText;
use crate::error::{Result, VeritasError};
use crate::model::capability::ClassifierCapability;
use crate::util::{clamp_percent, round2};

/// Confidence reported when nothing better is known.
pub const NEUTRAL_CONFIDENCE: f64 = 50.0;

/// Extracts a percentage confidence from whichever interface the loaded
/// classifier exposes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceEstimator;

impl ConfidenceEstimator {
    pub fn new() -> Self {
        ConfidenceEstimator
    }

    /// Confidence in `[0, 100]`, rounded to two decimals.
    ///
    /// Returns 50.0 for an absent classifier or empty text. Failures while
    /// scoring are logged and also yield 50.0.
    pub fn estimate(&self, capability: &ClassifierCapability, normalized: &NormalizedText) -> f64 {
        if capability.is_absent() || normalized.is_empty() {
            return NEUTRAL_CONFIDENCE;
        }

        match Self::try_estimate(capability, &normalized.to_string()) {
            Ok(confidence) => confidence,
            Err(e) => {
                warn!("Confidence estimation failed ({}): {e}", capability.kind());
                NEUTRAL_CONFIDENCE
            }
        }
    }

    fn try_estimate(capability: &ClassifierCapability, text: &str) -> Result<f64> {
        match capability {
            ClassifierCapability::PipelineWithProbability(pipeline) => {
                Self::from_probabilities(&pipeline.predict_proba(text)?)
            }
            ClassifierCapability::PipelineWithMargin(pipeline) => {
                let margin = pipeline.decision_function(text)?;
                if !margin.is_finite() {
                    return Err(VeritasError::model(format!("non-finite margin {margin}")));
                }
                Ok(clamp_percent((margin + 1.0) / 2.0 * 100.0))
            }
            ClassifierCapability::StandaloneProbability {
                classifier,
                vectorizer,
            } => {
                let features = vectorizer.transform(text)?;
                Self::from_probabilities(&classifier.predict_proba_features(&features)?)
            }
            ClassifierCapability::Absent => Ok(NEUTRAL_CONFIDENCE),
        }
    }

    fn from_probabilities(probabilities: &[f64]) -> Result<f64> {
        if probabilities.is_empty() {
            return Err(VeritasError::model("empty probability vector"));
        }
        if probabilities.iter().any(|p| !p.is_finite()) {
            return Err(VeritasError::model("non-finite class probability"));
        }
        let max = probabilities.iter().copied().fold(f64::MIN, f64::max);
        Ok(round2(max * 100.0).clamp(0.0, 100.0))
    }
}
