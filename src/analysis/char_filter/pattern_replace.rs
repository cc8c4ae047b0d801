use regex::Regex;

use super::CharFilter;
use crate::error::{Result, VeritasError};

/// Pattern matching every character that is neither an ASCII letter nor whitespace.
pub const NON_ASCII_LETTER_PATTERN: &str = r"[^a-zA-Z\s]";

/// A char filter that replaces text matching a regex pattern.
#[derive(Debug, Clone)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| VeritasError::Anyhow(anyhow::Error::from(e)))?,
            replacement: replacement.to_string(),
        })
    }

    /// Create a filter that deletes everything except ASCII letters and whitespace.
    pub fn ascii_letters_only() -> Result<Self> {
        Self::new(NON_ASCII_LETTER_PATTERN, "")
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
