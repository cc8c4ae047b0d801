//! TF-IDF vectorizer for text feature extraction.
//!
//! Terms are indexed in lexicographic order so that a fitted vocabulary is
//! reproducible and linear weights stored alongside it stay aligned.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::{Result, VeritasError};

/// Term analyzer used when none is given: word segmentation, lowercasing and
/// English stop word removal.
pub fn term_analyzer() -> Arc<dyn Analyzer> {
    Arc::new(
        PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .with_name("tfidf_terms"),
    )
}

/// TF-IDF vectorizer for text feature extraction.
#[derive(Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> index mapping.
    vocabulary: BTreeMap<String, usize>,
    /// Inverse document frequency for each term.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    #[serde(default)]
    n_documents: usize,
    /// Analyzer for tokenization.
    #[serde(skip, default = "term_analyzer")]
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new(term_analyzer())
    }
}

impl TfIdfVectorizer {
    /// Create a new, unfitted TF-IDF vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            vocabulary: BTreeMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
        }
    }

    /// Rebuild a fitted vectorizer from a stored vocabulary and IDF table.
    pub fn from_parts(vocabulary: BTreeMap<String, usize>, idf: Vec<f64>) -> Result<Self> {
        let vectorizer = Self {
            vocabulary,
            idf,
            n_documents: 0,
            analyzer: term_analyzer(),
        };
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    /// Check that every vocabulary index points into the IDF table.
    pub fn validate(&self) -> Result<()> {
        if self.vocabulary.len() != self.idf.len() {
            return Err(VeritasError::model(format!(
                "vocabulary has {} terms but idf has {} entries",
                self.vocabulary.len(),
                self.idf.len()
            )));
        }
        if let Some((term, idx)) = self.vocabulary.iter().find(|(_, idx)| **idx >= self.idf.len()) {
            return Err(VeritasError::model(format!(
                "term '{term}' has out-of-range index {idx}"
            )));
        }
        if self.idf.iter().any(|w| !w.is_finite()) {
            return Err(VeritasError::model("idf contains non-finite weights"));
        }
        Ok(())
    }

    /// Fit the vectorizer on training documents.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            return Err(VeritasError::model("cannot fit a vectorizer on zero documents"));
        }

        self.n_documents = documents.len();
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for doc in documents {
            let unique_tokens: BTreeSet<String> =
                self.tokenize(doc)?.into_iter().collect();
            for token in unique_tokens {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        // BTreeMap iteration is sorted, so indices follow term order.
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (idx, (term, df)) in document_frequency.into_iter().enumerate() {
            // IDF = ln((N + 1) / (df + 1)) + 1
            idf.push(((self.n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;

        Ok(())
    }

    /// Transform a document into an L2-normalized TF-IDF feature vector.
    ///
    /// Term frequencies are raw counts. A document with no known term maps to
    /// the zero vector.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let tokens = self.tokenize(document)?;
        let mut features = vec![0.0; self.vocabulary.len()];

        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                features[idx] += 1.0;
            }
        }

        for (idx, value) in features.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        let norm = features.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        Ok(features)
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyzer.analyze(text)?.map(|token| token.text).collect())
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Index of `term`, if it is part of the vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Number of documents the vectorizer was fitted on (0 if loaded from parts).
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted() -> TfIdfVectorizer {
        let documents = vec![
            "Aliens built the pyramids".to_string(),
            "Experts published a new study".to_string(),
            "The study was reviewed by experts".to_string(),
        ];
        let mut vectorizer = TfIdfVectorizer::default();
        vectorizer.fit(&documents).unwrap();
        vectorizer
    }

    #[test]
    fn test_tfidf_vectorizer() {
        let vectorizer = fitted();

        // "the", "a", "was", "by" are stop words.
        assert_eq!(vectorizer.vocabulary_size(), 8);
        assert_eq!(vectorizer.n_documents(), 3);

        let features = vectorizer.transform("new study").unwrap();
        assert_eq!(features.len(), vectorizer.vocabulary_size());

        let norm: f64 = features.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_vocabulary_is_sorted() {
        let vectorizer = fitted();
        assert_eq!(vectorizer.term_index("aliens"), Some(0));
        assert_eq!(vectorizer.term_index("built"), Some(1));
        assert_eq!(vectorizer.term_index("the"), None);
    }

    #[test]
    fn test_rarer_terms_weigh_more() {
        let vectorizer = fitted();
        let features = vectorizer.transform("aliens study").unwrap();
        let aliens = features[vectorizer.term_index("aliens").unwrap()];
        let study = features[vectorizer.term_index("study").unwrap()];
        assert!(aliens > study);
    }

    #[test]
    fn test_unknown_terms_give_zero_vector() {
        let vectorizer = fitted();
        let features = vectorizer.transform("completely unrelated words").unwrap();
        assert!(features.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_fit_requires_documents() {
        let mut vectorizer = TfIdfVectorizer::default();
        assert!(vectorizer.fit(&[]).is_err());
    }

    #[test]
    fn test_from_parts_validation() {
        let mut vocabulary = BTreeMap::new();
        vocabulary.insert("hoax".to_string(), 0);
        vocabulary.insert("study".to_string(), 1);

        assert!(TfIdfVectorizer::from_parts(vocabulary.clone(), vec![1.0, 1.5]).is_ok());
        assert!(TfIdfVectorizer::from_parts(vocabulary.clone(), vec![1.0]).is_err());

        vocabulary.insert("moon".to_string(), 7);
        assert!(TfIdfVectorizer::from_parts(vocabulary, vec![1.0, 1.0, 1.0]).is_err());
    }

    #[test]
    fn test_serde_keeps_vocabulary() {
        let vectorizer = fitted();
        let json = serde_json::to_string(&vectorizer).unwrap();
        let restored: TfIdfVectorizer = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.vocabulary_size(), vectorizer.vocabulary_size());
        assert_eq!(
            restored.transform("aliens pyramids").unwrap(),
            vectorizer.transform("aliens pyramids").unwrap()
        );
    }
}
