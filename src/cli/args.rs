//! Command line argument parsing for the Veritas CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::VeritasConfig;
use crate::error::Result;

/// Veritas - fake news detection for short news passages
#[derive(Parser, Debug, Clone)]
#[command(name = "veritas")]
#[command(about = "Classify news passages as fake or real")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct VeritasArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "VERITAS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Trained model artifact (overrides the configuration file)
    #[arg(short, long, value_name = "MODEL_FILE", env = "VERITAS_MODEL")]
    pub model: Option<PathBuf>,

    /// Corpus used to fit the vectorizer of a standalone model
    #[arg(long, value_name = "CORPUS_FILE")]
    pub vectorizer_corpus: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl VeritasArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the configuration: file (or defaults) plus command line overrides.
    pub fn load_config(&self) -> Result<VeritasConfig> {
        let mut config = match &self.config {
            Some(path) => VeritasConfig::from_file(path)?,
            None => VeritasConfig::default(),
        };

        if let Some(model) = &self.model {
            config.model.model_path = Some(model.clone());
        }
        if let Some(corpus) = &self.vectorizer_corpus {
            config.model.vectorizer_corpus = Some(corpus.clone());
        }

        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a news passage
    Classify(ClassifyArgs),

    /// Show the keywords that explain a passage
    Keywords(KeywordsArgs),

    /// Print (and optionally classify) a built-in sample passage
    Sample(SampleArgs),

    /// Classify passages read line by line from stdin, keeping a history
    Session(SessionArgs),

    /// Classify one passage per line of a file in parallel
    Batch(BatchArgs),
}

/// Where a single passage comes from.
#[derive(Parser, Debug, Clone)]
pub struct InputArgs {
    /// Passage text (reads stdin when neither TEXT nor --file is given)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the passage from a file
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments for classifying a passage
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Skip the keyword explanation
    #[arg(long)]
    pub no_reasons: bool,
}

/// Arguments for the keyword explanation
#[derive(Parser, Debug, Clone)]
pub struct KeywordsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Show every ranked token with its count instead of the top keywords
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the sample passages
#[derive(Parser, Debug, Clone)]
pub struct SampleArgs {
    /// Which sample to print (both when omitted)
    #[arg(short, long, value_enum)]
    pub kind: Option<SampleKind>,

    /// Classify the sample as well
    #[arg(long)]
    pub classify: bool,
}

/// Arguments for an interactive session
#[derive(Parser, Debug, Clone)]
pub struct SessionArgs {
    /// Number of predictions kept in the history
    #[arg(long, default_value = "5")]
    pub history_size: usize,
}

/// Arguments for batch classification
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// File with one passage per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Built-in sample passages.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleKind {
    Fake,
    Real,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify() {
        let args = VeritasArgs::try_parse_from(["veritas", "-vv", "classify", "Moon hoax"]).unwrap();
        assert_eq!(args.verbosity(), 2);
        match args.command {
            Command::Classify(classify) => {
                assert_eq!(classify.input.text.as_deref(), Some("Moon hoax"));
                assert!(!classify.no_reasons);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = VeritasArgs::try_parse_from(["veritas", "-q", "-vvv", "sample"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_text_conflicts_with_file() {
        let parsed =
            VeritasArgs::try_parse_from(["veritas", "classify", "text", "--file", "news.txt"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_model_override() {
        let args = VeritasArgs::try_parse_from([
            "veritas",
            "--model",
            "model.json",
            "--format",
            "json",
            "batch",
            "news.txt",
        ])
        .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);

        let config = args.load_config().unwrap();
        assert_eq!(config.model.model_path, Some(PathBuf::from("model.json")));
        assert_eq!(config.model.vectorizer_corpus, None);
    }
}
