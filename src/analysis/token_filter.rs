//! Token filter implementations for token transformation.
//!
//! Filters rewrite, mark, or drop tokens produced by a tokenizer. The news
//! pipeline chains them in this order:
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Lemma → Bounded Dedup
//! ```
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stop::StopFilter`] - Removes stop words
//! - [`lemma::LemmaFilter`] - Reduces words to their dictionary base form
//! - [`dedup::BoundedDedupFilter`] - Drops repeated lemmas once enough distinct ones were seen
//!
//! # Examples
//!
//! ```
//! use veritas::analysis::token_filter::Filter;
//! use veritas::analysis::token_filter::lowercase::LowercaseFilter;
//! use veritas::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod dedup;
pub mod lemma;
pub mod lowercase;
pub mod stop;

pub use dedup::BoundedDedupFilter;
pub use lemma::{LemmaFilter, Lemmatizer, WordNetLemmatizer};
pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
