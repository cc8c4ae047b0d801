//! News classification.
//!
//! [`Classifier`] runs the whole request: input validation, normalization,
//! scoring by the trained model or the keyword heuristic, and formatting of
//! the verdict.
//!
//! # Example
//!
//! ```
//! use veritas::classify::{Classifier, Verdict};
//! use veritas::model::ClassifierCapability;
//!
//! let classifier = Classifier::new(ClassifierCapability::Absent).unwrap();
//! let result = classifier.classify("Secret documents prove the moon landing was a hoax");
//!
//! assert_eq!(result.label(), Verdict::Fake);
//! assert!(!result.is_error());
//! ```

mod classifier;
mod error;
mod types;

pub use classifier::Classifier;
pub use error::ClassificationError;
pub use types::{ClassificationResult, Verdict};
