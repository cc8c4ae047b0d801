use serde::Serialize;
use thiserror::Error;

/// Why a classification request was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassificationError {
    #[error("Please enter some news text")]
    EmptyInput,

    #[error("News text exceeds {max} characters (got {length})")]
    InputTooLong { length: usize, max: usize },

    #[error("Invalid text after processing")]
    NormalizationEmpty,

    #[error("Prediction failed: {0}")]
    Prediction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ClassificationError::InputTooLong {
                length: 5001,
                max: 5000
            }
            .to_string(),
            "News text exceeds 5000 characters (got 5001)"
        );
        assert_eq!(
            ClassificationError::Prediction("shape mismatch".to_string()).to_string(),
            "Prediction failed: shape mismatch"
        );
    }
}
