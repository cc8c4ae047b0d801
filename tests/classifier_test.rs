use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use veritas::classify::{ClassificationError, Classifier, Verdict};
use veritas::config::VeritasConfig;
use veritas::error::Result;
use veritas::model::{
    ClassifierCapability, ConfidenceEstimator, LinearModel, LinearPipeline, Loss, MarginPipeline,
    ProbabilityPipeline, TextPipeline, TfIdfVectorizer,
};

fn pipeline(loss: Loss, classes: [&str; 2]) -> Result<Arc<LinearPipeline>> {
    let mut vocabulary = BTreeMap::new();
    for (idx, term) in ["alien", "evidence", "hoax", "research"].iter().enumerate() {
        vocabulary.insert(term.to_string(), idx);
    }
    let vectorizer = TfIdfVectorizer::from_parts(vocabulary, vec![1.0; 4])?;
    let model = LinearModel::new(
        vec![-1.0, 1.0, -1.0, 1.0],
        0.0,
        classes.iter().map(|c| c.to_string()).collect(),
        loss,
    )?;
    Ok(Arc::new(LinearPipeline::new(vectorizer, model)?))
}

/// Pipeline that records every scoring call it receives.
#[derive(Default)]
struct CountingPipeline {
    calls: AtomicUsize,
}

impl CountingPipeline {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextPipeline for CountingPipeline {
    fn predict(&self, _text: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("REAL".to_string())
    }

    fn name(&self) -> &str {
        "counting"
    }
}

impl ProbabilityPipeline for CountingPipeline {
    fn predict_proba(&self, _text: &str) -> Result<Vec<f64>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![0.2, 0.8])
    }
}

impl MarginPipeline for CountingPipeline {
    fn decision_function(&self, _text: &str) -> Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(0.6)
    }
}

const REJECTED_INPUTS: [&str; 4] = ["", "   ", " \t\n ", "?! 42 ... the of"];

#[test]
fn test_heuristic_classification_end_to_end() -> Result<()> {
    let classifier = Classifier::new(ClassifierCapability::Absent)?;

    let fake = classifier.classify("Aliens run a conspiracy and a hoax, says one report.");
    assert_eq!(fake.label(), Verdict::Fake);
    assert_eq!(fake.confidence(), 75.0);

    let neutral = classifier.classify("The weather was pleasant on Tuesday.");
    assert_eq!(neutral.label(), Verdict::Neutral);
    assert_eq!(neutral.confidence(), 50.0);
    assert!(!neutral.is_error());

    Ok(())
}

#[test]
fn test_margin_pipeline_classification() -> Result<()> {
    let classifier = Classifier::new(ClassifierCapability::PipelineWithMargin(pipeline(
        Loss::Hinge,
        ["FAKE", "REAL"],
    )?))?;

    // Normalization lemmatizes "Aliens" to "alien" before the vectorizer sees it.
    let fake = classifier.classify("Aliens staged the moon landing hoax");
    assert_eq!(fake.label(), Verdict::Fake);
    assert!((0.0..=100.0).contains(&fake.confidence()));
    assert!(fake.message().starts_with("🚨 Fake News Detected"));

    let real = classifier.classify("New research provides evidence");
    assert_eq!(real.label(), Verdict::Real);
    assert_eq!(real.confidence(), 100.0);

    Ok(())
}

#[test]
fn test_probability_pipeline_with_numeric_labels() -> Result<()> {
    let classifier = Classifier::new(ClassifierCapability::PipelineWithProbability(pipeline(
        Loss::Log,
        ["0", "1"],
    )?))?;

    let result = classifier.classify("alien hoax");
    assert_eq!(result.label(), Verdict::Fake);
    assert!(result.confidence() > 50.0);

    Ok(())
}

#[test]
fn test_unknown_vocabulary_gives_even_margin() -> Result<()> {
    let classifier = Classifier::new(ClassifierCapability::PipelineWithMargin(pipeline(
        Loss::Hinge,
        ["FAKE", "REAL"],
    )?))?;

    // No known term: margin 0 selects the first class at 50%.
    let result = classifier.classify("The weather was pleasant on Tuesday");
    assert_eq!(result.label(), Verdict::Fake);
    assert_eq!(result.confidence(), 50.0);

    Ok(())
}

#[test]
fn test_rejections() -> Result<()> {
    let classifier = Classifier::new(ClassifierCapability::Absent)?;

    assert_eq!(classifier.try_classify(""), Err(ClassificationError::EmptyInput));
    assert_eq!(classifier.try_classify(" \t\n "), Err(ClassificationError::EmptyInput));
    assert_eq!(
        classifier.try_classify("?! 42 ... the of"),
        Err(ClassificationError::NormalizationEmpty)
    );

    let too_long = "word ".repeat(1001);
    let result = classifier.classify(&too_long);
    assert!(result.is_error());
    assert_eq!(result.confidence(), 0.0);
    assert!(result.message().contains("5000"));

    Ok(())
}

#[test]
fn test_rejected_input_never_reaches_probability_pipeline() -> Result<()> {
    let pipeline = Arc::new(CountingPipeline::default());
    let classifier = Classifier::new(ClassifierCapability::PipelineWithProbability(
        pipeline.clone(),
    ))?;

    let too_long = "hoax ".repeat(1001);
    assert_eq!(too_long.chars().count(), 5005);
    assert_eq!(
        classifier.try_classify(&too_long),
        Err(ClassificationError::InputTooLong {
            length: 5005,
            max: 5000
        })
    );
    for input in REJECTED_INPUTS {
        assert!(classifier.classify(input).is_error(), "input: {input:?}");
    }
    assert_eq!(pipeline.calls(), 0);

    // The same pipeline is consulted once the input is acceptable.
    let accepted = classifier.classify(&"hoax ".repeat(1000));
    assert!(!accepted.is_error());
    assert_eq!(accepted.label(), Verdict::Real);
    assert!(pipeline.calls() > 0);

    Ok(())
}

#[test]
fn test_rejected_input_never_reaches_margin_pipeline() -> Result<()> {
    let pipeline = Arc::new(CountingPipeline::default());
    let classifier =
        Classifier::new(ClassifierCapability::PipelineWithMargin(pipeline.clone()))?;

    assert!(classifier.classify(&"x".repeat(5001)).is_error());
    for input in REJECTED_INPUTS {
        assert!(classifier.classify(input).is_error(), "input: {input:?}");
    }
    assert!(
        classifier
            .classify_batch(&["", "?! 42", "moon hoax ".repeat(600).as_str()])
            .iter()
            .all(|result| result.is_error())
    );
    assert_eq!(pipeline.calls(), 0);

    Ok(())
}

#[test]
fn test_custom_configuration() -> Result<()> {
    let config = VeritasConfig::builder()
        .max_input_length(20)
        .top_keywords(1)
        .fake_threshold(40.0)
        .build();
    let classifier = Classifier::with_config(&config, ClassifierCapability::Absent)?;

    assert!(classifier.classify("this passage is longer than twenty").is_error());

    // One fake and one real hit: 50% fake clears a 40% threshold.
    let result = classifier.classify("hoax study");
    assert_eq!(result.label(), Verdict::Fake);
    assert_eq!(result.confidence(), 50.0);

    assert_eq!(classifier.summarize_keywords("moon moon hoax"), vec!["moon"]);

    Ok(())
}

#[test]
fn test_estimator_absent_is_neutral() {
    let estimator = ConfidenceEstimator::new();
    let normalized = veritas::analysis::NormalizedText::from_tokens(["moon", "hoax"]);
    assert_eq!(estimator.estimate(&ClassifierCapability::Absent, &normalized), 50.0);
}

#[test]
fn test_concurrent_classification() -> Result<()> {
    let classifier = Arc::new(Classifier::new(ClassifierCapability::Absent)?);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let classifier = Arc::clone(&classifier);
            std::thread::spawn(move || classifier.classify("Secret hoax revealed by officials"))
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.label(), Verdict::Fake);
    }

    Ok(())
}
