//! Analyzer trait and implementations.
//!
//! Analyzers are the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`NewsAnalyzer`](news::NewsAnalyzer) - The normalization pipeline used by the classifier
//!
//! # Examples
//!
//! ```
//! use veritas::analysis::analyzer::Analyzer;
//! use veritas::analysis::analyzer::news::NewsAnalyzer;
//!
//! let analyzer = NewsAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("The Reports, the Experts!").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "report");
//! assert_eq!(tokens[1].text, "expert");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Requires `Send + Sync` so one analyzer can serve concurrent
/// classification calls.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod news;
pub mod pipeline;

pub use news::NewsAnalyzer;
pub use pipeline::PipelineAnalyzer;
