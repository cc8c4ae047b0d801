//! Command implementations for the Veritas CLI.

use std::fs;
use std::io::{self, BufRead, Read};
use std::time::Instant;

use log::{debug, info};

use crate::classify::{ClassificationResult, Classifier, Verdict};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, VeritasError};
use crate::history::PredictionHistory;

/// Sample passage that reads as fabricated.
pub const SAMPLE_NEWS_FAKE: &str = "The President announced today that the Earth is flat and space doesn't exist. Scientists have been lying to us for centuries about this.";

/// Sample passage that reads as genuine.
pub const SAMPLE_NEWS_REAL: &str = "The World Health Organization (WHO) announced new guidelines for public health management and disease prevention strategies in collaboration with global health experts.";

/// Session input that prints the history so far.
const SESSION_SHOW_HISTORY: &str = ":history";

/// Session input that empties the history.
const SESSION_CLEAR_HISTORY: &str = ":clear";

/// Execute a CLI command.
pub fn execute_command(args: VeritasArgs) -> Result<()> {
    let config = args.load_config()?;
    let classifier = Classifier::from_config(&config)?;
    info!(
        "Classifier ready ({}, max {} characters)",
        classifier.capability().kind(),
        classifier.max_input_length()
    );

    match &args.command {
        Command::Classify(classify_args) => classify_passage(&classifier, classify_args, &args),
        Command::Keywords(keywords_args) => show_keywords(&classifier, keywords_args, &args),
        Command::Sample(sample_args) => show_sample(&classifier, sample_args, &args),
        Command::Session(session_args) => run_session(&classifier, session_args, &args),
        Command::Batch(batch_args) => run_batch(&classifier, batch_args, &args),
    }
}

/// Cut `text` to at most `max` characters.
///
/// Returns the kept prefix and whether anything was cut.
pub fn truncate_chars(text: &str, max: usize) -> (&str, bool) {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => (&text[..byte_idx], true),
        None => (text, false),
    }
}

/// Classify `text` the way a request handler does: truncate, classify and
/// attach the keyword explanation.
pub fn verify(classifier: &Classifier, text: &str, with_reasons: bool) -> VerificationReport {
    verify_detailed(classifier, text, with_reasons).1
}

fn verify_detailed(
    classifier: &Classifier,
    text: &str,
    with_reasons: bool,
) -> (ClassificationResult, VerificationReport) {
    let start_time = Instant::now();
    let (text, truncated) = truncate_chars(text, classifier.max_input_length());
    if truncated {
        debug!("Input truncated to {} characters", classifier.max_input_length());
    }

    let result = classifier.classify(text);
    let reasons = if with_reasons && !result.is_error() {
        classifier.summarize_keywords(text)
    } else {
        Vec::new()
    };

    let report = VerificationReport::new(
        &result,
        reasons,
        start_time.elapsed().as_secs_f64(),
        truncated,
    );
    (result, report)
}

fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    if let Some(path) = &input.file {
        return Ok(fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Classify a single passage.
fn classify_passage(classifier: &Classifier, args: &ClassifyArgs, cli_args: &VeritasArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let report = verify(classifier, &text, !args.no_reasons);

    output_result("Classification", &report, cli_args)
}

/// Show the keyword explanation of a passage.
fn show_keywords(classifier: &Classifier, args: &KeywordsArgs, cli_args: &VeritasArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let (text, _) = truncate_chars(&text, classifier.max_input_length());

    let ranking = classifier.rank_keywords(text);
    let keywords = if args.all {
        ranking.entries().to_vec()
    } else {
        let top: Vec<String> = classifier.summarize_keywords(text);
        ranking
            .entries()
            .iter()
            .filter(|entry| top.contains(&entry.token))
            .cloned()
            .collect()
    };

    let report = KeywordReport {
        normalized: classifier.normalize(text).to_string(),
        keywords,
    };
    output_result("Keywords", &report, cli_args)
}

/// Print the built-in sample passages.
fn show_sample(classifier: &Classifier, args: &SampleArgs, cli_args: &VeritasArgs) -> Result<()> {
    let kinds = match args.kind {
        Some(kind) => vec![kind],
        None => vec![SampleKind::Fake, SampleKind::Real],
    };

    let reports: Vec<SampleReport> = kinds
        .into_iter()
        .map(|kind| {
            let text = match kind {
                SampleKind::Fake => SAMPLE_NEWS_FAKE,
                SampleKind::Real => SAMPLE_NEWS_REAL,
            };
            SampleReport {
                kind,
                text: text.to_string(),
                verification: args.classify.then(|| verify(classifier, text, true)),
            }
        })
        .collect();

    output_result("Samples", &reports, cli_args)
}

/// Classify stdin line by line, keeping a bounded history.
fn run_session(classifier: &Classifier, args: &SessionArgs, cli_args: &VeritasArgs) -> Result<()> {
    let mut history = PredictionHistory::with_capacity(args.history_size);
    let mut classified = 0;
    let human = cli_args.output_format == OutputFormat::Human;

    if human && cli_args.verbosity() > 0 {
        println!(
            "Enter one passage per line ({SESSION_SHOW_HISTORY} shows the history, {SESSION_CLEAR_HISTORY} clears it)."
        );
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();

        match trimmed {
            "" => continue,
            SESSION_SHOW_HISTORY => {
                if human {
                    session_report(&history, classified).print_human(cli_args);
                }
                continue;
            }
            SESSION_CLEAR_HISTORY => {
                history.clear();
                debug!("Session history cleared");
                continue;
            }
            _ => {}
        }

        let (result, report) = verify_detailed(classifier, &line, true);
        classified += 1;
        if human {
            report.print_human(cli_args);
        }

        let (text, _) = truncate_chars(&line, classifier.max_input_length());
        history.record(text, &result);
    }

    output_result(
        "Session finished",
        &session_report(&history, classified),
        cli_args,
    )
}

fn session_report(history: &PredictionHistory, classified: usize) -> SessionReport {
    SessionReport {
        classified,
        history: history.entries().cloned().collect(),
    }
}

/// Classify every non-empty line of a file in parallel.
fn run_batch(classifier: &Classifier, args: &BatchArgs, cli_args: &VeritasArgs) -> Result<()> {
    let content = fs::read_to_string(&args.file)?;
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, truncate_chars(line, classifier.max_input_length()).0))
        .collect();

    if lines.is_empty() {
        return Err(VeritasError::invalid_argument(format!(
            "{} contains no passages",
            args.file.display()
        )));
    }

    let start_time = Instant::now();
    let texts: Vec<&str> = lines.iter().map(|(_, text)| *text).collect();
    let results = classifier.classify_batch(&texts);
    let duration = start_time.elapsed();

    let mut report = BatchReport {
        entries: Vec::with_capacity(results.len()),
        fake: 0,
        real: 0,
        neutral: 0,
        errors: 0,
        duration_ms: duration.as_millis() as u64,
        passages_per_second: results.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    };

    for ((line, _), result) in lines.iter().zip(&results) {
        match result.label() {
            Verdict::Fake => report.fake += 1,
            Verdict::Real => report.real += 1,
            Verdict::Neutral => report.neutral += 1,
            Verdict::Error => report.errors += 1,
        }
        report.entries.push(BatchEntry {
            line: *line,
            label: result.label(),
            confidence: result.confidence(),
            prediction: result.message().to_string(),
        });
    }

    output_result("Batch classification", &report, cli_args)
}
