use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::whitespace_collapse::WhitespaceCollapseCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::dedup::BoundedDedupFilter;
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::config::DEFAULT_DEDUP_THRESHOLD;
use crate::error::Result;

/// The analysis chain applied to every news passage before classification.
///
/// ASCII-letter cleanup, whitespace collapse, word segmentation, lowercasing,
/// English stop word removal, lemmatization and bounded deduplication.
pub struct NewsAnalyzer {
    inner: PipelineAnalyzer,
}

impl NewsAnalyzer {
    pub fn new() -> Result<Self> {
        Self::with_dedup_threshold(DEFAULT_DEDUP_THRESHOLD)
    }

    pub fn with_dedup_threshold(threshold: usize) -> Result<Self> {
        let tokenizer = Arc::new(UnicodeWordTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(PatternReplaceCharFilter::ascii_letters_only()?))
            .add_char_filter(Arc::new(WhitespaceCollapseCharFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(LemmaFilter::new()))
            .add_filter(Arc::new(BoundedDedupFilter::new(threshold)))
            .with_name("news");

        Ok(Self { inner: analyzer })
    }
}

impl Analyzer for NewsAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "news"
    }
}

impl Debug for NewsAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn texts(analyzer: &NewsAnalyzer, input: &str) -> Vec<String> {
        analyzer
            .analyze(input)
            .unwrap()
            .map(|t: Token| t.text)
            .collect()
    }

    #[test]
    fn test_news_analyzer() {
        let analyzer = NewsAnalyzer::new().unwrap();

        assert_eq!(
            texts(&analyzer, "The President announced: Scientists have been lying!"),
            vec!["president", "announced", "scientist", "lying"]
        );
    }

    #[test]
    fn test_digits_and_punctuation_removed() {
        let analyzer = NewsAnalyzer::new().unwrap();

        assert_eq!(
            texts(&analyzer, "COVID-19 cases rose 20% in 2020"),
            vec!["covid", "case", "rose"]
        );
    }

    #[test]
    fn test_apostrophes_join_words() {
        let analyzer = NewsAnalyzer::new().unwrap();

        // "doesn't" becomes "doesnt", which is not in the stop list.
        assert_eq!(
            texts(&analyzer, "Space doesn't exist"),
            vec!["space", "doesnt", "exist"]
        );
    }

    #[test]
    fn test_analyzer_name() {
        let analyzer = NewsAnalyzer::new().unwrap();
        assert_eq!(analyzer.name(), "news");
    }
}
