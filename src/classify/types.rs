//! Common types for news classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classify::error::ClassificationError;
use crate::heuristic::HeuristicScore;

/// Canonical classification label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The passage reads as fabricated news.
    Fake,
    /// The passage reads as genuine news.
    Real,
    /// No evidence either way (heuristic path only).
    Neutral,
    /// The request was rejected.
    Error,
}

impl Verdict {
    /// Lowercase name, as used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Fake => "fake",
            Verdict::Real => "real",
            Verdict::Neutral => "neutral",
            Verdict::Error => "error",
        }
    }

    /// Icon shown in front of human-readable messages.
    pub fn icon(&self) -> &'static str {
        match self {
            Verdict::Fake => "🚨",
            Verdict::Real => "✓",
            Verdict::Neutral => "⚠️",
            Verdict::Error => "❌",
        }
    }

    /// Map a raw model label onto `Fake` or `Real`.
    ///
    /// `"0"`, `"false"` and `"fake"` (any case, surrounding whitespace
    /// ignored) mean fake; every other label means real.
    pub fn from_model_label(label: &str) -> Self {
        let label = label.trim();
        if ["0", "false", "fake"]
            .iter()
            .any(|fake| label.eq_ignore_ascii_case(fake))
        {
            Verdict::Fake
        } else {
            Verdict::Real
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a classification request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    label: Verdict,
    confidence: f64,
    message: String,
    is_error: bool,
}

impl ClassificationResult {
    /// Result of a trained classifier. Anything but `Fake` is reported as real.
    pub fn from_model(verdict: Verdict, confidence: f64) -> Self {
        let (label, headline) = if verdict == Verdict::Fake {
            (Verdict::Fake, "Fake News Detected")
        } else {
            (Verdict::Real, "Real News Detected")
        };

        ClassificationResult {
            label,
            confidence,
            message: format!("{} {headline} ({confidence:.2}% confidence)", label.icon()),
            is_error: false,
        }
    }

    /// Result of the keyword heuristic.
    pub fn from_heuristic(score: &HeuristicScore) -> Self {
        let confidence = score.confidence;
        let message = match score.verdict {
            Verdict::Fake => format!("{} Likely Fake News ({confidence:.2}% confidence)", Verdict::Fake.icon()),
            Verdict::Real => format!("{} Likely Real News ({confidence:.2}% confidence)", Verdict::Real.icon()),
            _ => format!(
                "{} Unclear - No specific indicators found (neutral prediction)",
                Verdict::Neutral.icon()
            ),
        };

        ClassificationResult {
            label: score.verdict,
            confidence,
            message,
            is_error: false,
        }
    }

    /// A rejected request.
    pub fn from_error(error: &ClassificationError) -> Self {
        ClassificationResult {
            label: Verdict::Error,
            confidence: 0.0,
            message: format!("{} Error: {error}", Verdict::Error.icon()),
            is_error: true,
        }
    }

    pub fn label(&self) -> Verdict {
        self.label
    }

    /// Confidence percentage in `[0, 100]`; 0 for errors.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Human-readable verdict line.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }
}
