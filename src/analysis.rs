//! Text analysis module for Veritas.
//!
//! Char filters, tokenizers, token filters and analyzers that turn a raw news
//! passage into the normalized lemma sequence consumed by the classifier and
//! the keyword explainer.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, NewsAnalyzer, PipelineAnalyzer};
pub use normalizer::{NormalizedText, TextNormalizer};
pub use token::{Token, TokenStream};
