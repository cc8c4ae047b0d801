//! Char filter implementations for text cleanup.
//!
//! Char filters rewrite the raw string before it reaches the tokenizer.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`whitespace_collapse::WhitespaceCollapseCharFilter`] - Collapses whitespace runs and trims
//!
//! # Examples
//!
//! ```
//! use veritas::analysis::char_filter::CharFilter;
//! use veritas::analysis::char_filter::whitespace_collapse::WhitespaceCollapseCharFilter;
//!
//! let filter = WhitespaceCollapseCharFilter::new();
//! assert_eq!(filter.filter("  breaking \t\n news "), "breaking news");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod pattern_replace;
pub mod whitespace_collapse;

pub use pattern_replace::PatternReplaceCharFilter;
pub use whitespace_collapse::WhitespaceCollapseCharFilter;
