//! Loading the trained classifier at startup.
//!
//! The artifact is a JSON document tagged by `kind`:
//!
//! ```json
//! { "kind": "pipeline",
//!   "vectorizer": { "vocabulary": { "hoax": 0, "study": 1 }, "idf": [1.4, 1.4] },
//!   "classifier": { "weights": [-2.0, 2.0], "intercept": 0.0,
//!                   "classes": ["FAKE", "REAL"], "loss": "hinge" } }
//! ```
//!
//! A `"standalone"` artifact carries only the classifier; its vectorizer is
//! fitted at load time from the configured corpus.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;
use crate::error::{Result, VeritasError};
use crate::model::capability::ClassifierCapability;
use crate::model::linear::{LinearModel, LinearPipeline, Loss};
use crate::model::tfidf::TfIdfVectorizer;

/// CSV column holding the corpus documents.
pub const CORPUS_COLUMN: &str = "Statement";

/// Serialized classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelArtifact {
    /// Vectorizer and classification stage stored together.
    Pipeline {
        vectorizer: TfIdfVectorizer,
        classifier: LinearModel,
    },
    /// Classification stage only; the vectorizer is fitted from a corpus.
    Standalone { classifier: LinearModel },
}

impl ModelArtifact {
    /// Read an artifact from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Write the artifact as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer(writer, self)?;
        Ok(())
    }
}

/// Read corpus documents from `path`.
///
/// Files with a `.csv` extension use the `Statement` column; any other file
/// holds one document per non-blank line.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let documents = if is_csv {
        let mut reader = csv::Reader::from_path(path)?;
        let column = reader
            .headers()?
            .iter()
            .position(|header| header.trim() == CORPUS_COLUMN)
            .ok_or_else(|| {
                VeritasError::config(format!(
                    "{} has no '{CORPUS_COLUMN}' column",
                    path.display()
                ))
            })?;

        let mut documents = Vec::new();
        for record in reader.records() {
            let record = record?;
            if let Some(statement) = record.get(column) {
                if !statement.trim().is_empty() {
                    documents.push(statement.to_string());
                }
            }
        }
        documents
    } else {
        let reader = BufReader::new(File::open(path)?);
        let mut documents = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                documents.push(line);
            }
        }
        documents
    };

    if documents.is_empty() {
        return Err(VeritasError::config(format!(
            "corpus {} contains no documents",
            path.display()
        )));
    }
    Ok(documents)
}

/// Build the capability described by `config`, surfacing every failure.
///
/// No configured model path is not a failure: it yields `Absent`.
pub fn try_load_capability(config: &ModelConfig) -> Result<ClassifierCapability> {
    let Some(model_path) = config.model_path.as_ref() else {
        return Ok(ClassifierCapability::Absent);
    };

    match ModelArtifact::from_file(model_path)? {
        ModelArtifact::Pipeline {
            vectorizer,
            classifier,
        } => {
            let loss = classifier.loss();
            let pipeline = Arc::new(LinearPipeline::new(vectorizer, classifier)?);
            Ok(match loss {
                Loss::Log => ClassifierCapability::PipelineWithProbability(pipeline),
                Loss::Hinge => ClassifierCapability::PipelineWithMargin(pipeline),
            })
        }
        ModelArtifact::Standalone { classifier } => {
            classifier.validate()?;
            if classifier.loss() != Loss::Log {
                return Err(VeritasError::model(
                    "a standalone classifier must provide probabilities (loss \"log\")",
                ));
            }
            let corpus_path = config.vectorizer_corpus.as_ref().ok_or_else(|| {
                VeritasError::config("a standalone classifier needs a vectorizer corpus")
            })?;

            let documents = load_corpus(corpus_path)?;
            let mut vectorizer = TfIdfVectorizer::default();
            vectorizer.fit(&documents)?;
            if vectorizer.vocabulary_size() != classifier.n_features() {
                return Err(VeritasError::model(format!(
                    "corpus vocabulary has {} terms but the classifier expects {}",
                    vectorizer.vocabulary_size(),
                    classifier.n_features()
                )));
            }

            Ok(ClassifierCapability::StandaloneProbability {
                classifier: Arc::new(classifier),
                vectorizer: Arc::new(vectorizer),
            })
        }
    }
}

/// Build the capability described by `config`.
///
/// Any failure is logged and degrades to [`ClassifierCapability::Absent`].
pub fn load_capability(config: &ModelConfig) -> ClassifierCapability {
    match try_load_capability(config) {
        Ok(ClassifierCapability::Absent) => {
            info!("No trained classifier configured, using keyword heuristics");
            ClassifierCapability::Absent
        }
        Ok(capability) => {
            info!("Loaded classifier ({})", capability.kind());
            capability
        }
        Err(e) => {
            warn!("Failed to load classifier, using keyword heuristics: {e}");
            ClassifierCapability::Absent
        }
    }
}
