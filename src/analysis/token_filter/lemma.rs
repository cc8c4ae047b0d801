//! Lemmatization token filter and lemmatizer implementations.
//!
//! A lemmatizer maps an inflected word to its dictionary base form
//! ("stories" → "story", "women" → "woman"). [`WordNetLemmatizer`] follows the
//! noun detachment rules of WordNet's morphological processor together with
//! its irregular-form exception list. It has no dictionary to validate
//! candidates against, so suffix rules carry guards for the common
//! non-plural endings (`-ss`, `-us`, `-is`) plus a table of invariant words.
//! Plurals the suffix rules would get wrong (`-ves`, `-oes`, `-ses`) are
//! listed as exceptions.

use ahash::{AHashMap, AHashSet};

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for lemmatization algorithms.
pub trait Lemmatizer: Send + Sync {
    /// Reduce a lowercase word to its lemma.
    fn lemmatize(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

/// Irregular plural forms and the lemma they map to.
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("dice", "die"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("businessmen", "businessman"),
    ("spokesmen", "spokesman"),
    ("congressmen", "congressman"),
    ("policemen", "policeman"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("lies", "lie"),
    ("ties", "tie"),
    ("pies", "pie"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("leaves", "leaf"),
    ("thieves", "thief"),
    ("calves", "calf"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("heroes", "hero"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("echoes", "echo"),
    ("vetoes", "veto"),
    ("torpedoes", "torpedo"),
    ("crises", "crisis"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("diagnoses", "diagnosis"),
    ("buses", "bus"),
    ("gases", "gas"),
    ("viruses", "virus"),
    ("campuses", "campus"),
    ("statuses", "status"),
    ("aliases", "alias"),
    ("atlases", "atlas"),
    ("biases", "bias"),
];

/// Words ending in `s` that are already in base form.
const INVARIANT_WORDS: &[&str] = &[
    "news",
    "series",
    "species",
    "means",
    "politics",
    "physics",
    "economics",
    "mathematics",
    "ethics",
    "athletics",
    "headquarters",
    "always",
    "perhaps",
    "whereas",
    "sometimes",
    "lens",
    "yes",
    "thus",
    "chaos",
    "plus",
    "aids",
    "bias",
    "alias",
    "atlas",
    "canvas",
    "texas",
    "kansas",
    "arkansas",
    "christmas",
    "pancreas",
    "cosmos",
    "ethos",
    "pathos",
    "kudos",
    "logos",
    "rhinoceros",
];

/// Suffix substitutions, checked longest first.
const NOUN_SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("zzes", "zz"),
    ("ies", "y"),
    ("xes", "x"),
];

/// Endings that look plural but are not.
const NON_PLURAL_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Rule-based noun lemmatizer modelled on WordNet's morphological processor.
#[derive(Debug, Clone)]
pub struct WordNetLemmatizer {
    exceptions: AHashMap<&'static str, &'static str>,
    invariant: AHashSet<&'static str>,
}

impl WordNetLemmatizer {
    /// Create a new lemmatizer with the built-in exception tables.
    pub fn new() -> Self {
        WordNetLemmatizer {
            exceptions: IRREGULAR_NOUNS.iter().copied().collect(),
            invariant: INVARIANT_WORDS.iter().copied().collect(),
        }
    }

    fn apply_suffix_rules(word: &str) -> Option<String> {
        for (suffix, replacement) in NOUN_SUFFIX_RULES {
            // Keep at least two characters of stem ahead of the suffix.
            if word.len() >= suffix.len() + 2 && word.ends_with(suffix) {
                let stem = &word[..word.len() - suffix.len()];
                return Some(format!("{stem}{replacement}"));
            }
        }

        if word.len() > 3
            && word.ends_with('s')
            && !NON_PLURAL_ENDINGS.iter().any(|ending| word.ends_with(ending))
        {
            return Some(word[..word.len() - 1].to_string());
        }

        None
    }
}

impl Default for WordNetLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for WordNetLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return (*lemma).to_string();
        }

        if word.len() <= 3 || self.invariant.contains(word) || !word.is_ascii() {
            return word.to_string();
        }

        Self::apply_suffix_rules(word).unwrap_or_else(|| word.to_string())
    }

    fn name(&self) -> &'static str {
        "wordnet"
    }
}

/// Filter that replaces each token's text with its lemma.
pub struct LemmaFilter {
    lemmatizer: Box<dyn Lemmatizer>,
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl LemmaFilter {
    /// Create a new lemma filter with the WordNet-style lemmatizer.
    pub fn new() -> Self {
        LemmaFilter {
            lemmatizer: Box::new(WordNetLemmatizer::new()),
        }
    }

    /// Create a lemma filter with a custom lemmatizer.
    pub fn with_lemmatizer(lemmatizer: Box<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }
}

impl Default for LemmaFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lemma = self.lemmatizer.lemmatize(&token.text);
                token.with_text(lemma)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
