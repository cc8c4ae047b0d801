//! Output formatting for CLI commands.

use serde::Serialize;

use crate::classify::{ClassificationResult, Verdict};
use crate::cli::args::{OutputFormat, SampleKind, VeritasArgs};
use crate::error::Result;
use crate::explain::KeywordScore;
use crate::history::HistoryEntry;

/// Summary used when no keyword survived normalization.
pub const DEFAULT_REASON_SUMMARY: &str = "Key indicators identified from input text.";

/// Result of classifying one passage, with its explanation.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub label: Verdict,
    pub prediction: String,
    pub confidence: f64,
    pub reason_summary: String,
    pub reasons: Vec<String>,
    pub processing_time: String,
    pub is_error: bool,
    /// Whether the input was cut to the maximum length before classifying.
    pub truncated: bool,
}

impl VerificationReport {
    pub fn new(
        result: &ClassificationResult,
        reasons: Vec<String>,
        elapsed_secs: f64,
        truncated: bool,
    ) -> Self {
        let reason_summary = if reasons.is_empty() {
            DEFAULT_REASON_SUMMARY.to_string()
        } else {
            reasons.join(", ")
        };

        VerificationReport {
            label: result.label(),
            prediction: result.message().to_string(),
            confidence: result.confidence(),
            reason_summary,
            reasons,
            processing_time: format!("{elapsed_secs:.3}s"),
            is_error: result.is_error(),
            truncated,
        }
    }
}

/// Keyword explanation of a passage.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordReport {
    pub normalized: String,
    pub keywords: Vec<KeywordScore>,
}

/// A built-in sample passage.
#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    pub kind: SampleKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationReport>,
}

/// History collected during a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub classified: usize,
    pub history: Vec<HistoryEntry>,
}

/// One line of a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub line: usize,
    pub label: Verdict,
    pub confidence: f64,
    pub prediction: String,
}

/// Batch classification results.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub fake: usize,
    pub real: usize,
    pub neutral: usize,
    pub errors: usize,
    pub duration_ms: u64,
    pub passages_per_second: f64,
}

/// Human-readable rendering of a report.
pub trait HumanOutput {
    fn print_human(&self, args: &VeritasArgs);
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &VeritasArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &VeritasArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl HumanOutput for VerificationReport {
    fn print_human(&self, args: &VeritasArgs) {
        println!("{}", self.prediction);
        if self.is_error {
            return;
        }
        if !self.reasons.is_empty() {
            println!("Reasons: {}", self.reason_summary);
        }
        if self.truncated {
            println!("(input truncated)");
        }
        if args.verbosity() > 1 {
            println!("Processing time: {}", self.processing_time);
        }
    }
}

impl HumanOutput for KeywordReport {
    fn print_human(&self, _args: &VeritasArgs) {
        if self.keywords.is_empty() {
            println!("No keywords found.");
            return;
        }
        println!("Keywords:");
        println!("═════════");
        for (rank, keyword) in self.keywords.iter().enumerate() {
            println!("{:>3}. {:<20} {}", rank + 1, keyword.token, keyword.count);
        }
    }
}

impl HumanOutput for SampleReport {
    fn print_human(&self, args: &VeritasArgs) {
        let title = match self.kind {
            SampleKind::Fake => "Sample (fake)",
            SampleKind::Real => "Sample (real)",
        };
        println!("{title}:");
        println!("{}", self.text);
        if let Some(verification) = &self.verification {
            verification.print_human(args);
        }
    }
}

impl<T: HumanOutput> HumanOutput for Vec<T> {
    fn print_human(&self, args: &VeritasArgs) {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                println!();
            }
            item.print_human(args);
        }
    }
}

impl HumanOutput for SessionReport {
    fn print_human(&self, _args: &VeritasArgs) {
        println!();
        println!("Recent predictions ({} classified):", self.classified);
        println!("─────────────");
        if self.history.is_empty() {
            println!("(none)");
        }
        for entry in &self.history {
            println!(
                "[{}] {} | {}",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                entry.message,
                entry.text
            );
        }
    }
}

impl HumanOutput for BatchReport {
    fn print_human(&self, args: &VeritasArgs) {
        for entry in &self.entries {
            println!("{:>5}: {}", entry.line, entry.prediction);
        }
        println!();
        println!(
            "fake: {}  real: {}  neutral: {}  errors: {}",
            self.fake, self.real, self.neutral, self.errors
        );
        if args.verbosity() > 1 {
            println!(
                "{} passages in {} ms ({:.1}/s)",
                self.entries.len(),
                self.duration_ms,
                self.passages_per_second
            );
        }
    }
}
