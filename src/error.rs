//! Error types for the Veritas library.
//!
//! All fallible plumbing (artifact loading, configuration, analysis setup,
//! CLI I/O) reports errors through [`VeritasError`]. Classification itself
//! never fails with this type: the facade folds every problem into a
//! structured result instead.
//!
//! # Examples
//!
//! ```
//! use veritas::error::{VeritasError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(VeritasError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Veritas operations.
#[derive(Error, Debug)]
pub enum VeritasError {
    /// I/O errors (file operations, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Model artifact errors (missing stages, shape mismatches, etc.)
    #[error("Model error: {0}")]
    Model(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with VeritasError.
pub type Result<T> = std::result::Result<T, VeritasError>;

impl VeritasError {
    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        VeritasError::Model(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        VeritasError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        VeritasError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = VeritasError::config("max_input_length must be positive");
        assert_eq!(
            error.to_string(),
            "Configuration error: max_input_length must be positive"
        );

        let error = VeritasError::model("missing clf stage");
        assert_eq!(error.to_string(), "Model error: missing clf stage");

        let error = VeritasError::invalid_argument("top_n must be positive");
        assert_eq!(
            error.to_string(),
            "Error: Invalid argument: top_n must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let veritas_error = VeritasError::from(io_error);

        match veritas_error {
            VeritasError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
