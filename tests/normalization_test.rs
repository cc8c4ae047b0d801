use veritas::analysis::{NormalizedText, TextNormalizer};
use veritas::error::Result;
use veritas::explain::KeywordSummarizer;

#[test]
fn test_sample_passage_normalization() -> Result<()> {
    let normalizer = TextNormalizer::new()?;
    let normalized = normalizer.normalize(
        "The President announced today that the Earth is flat and space doesn't exist.",
    );

    assert_eq!(
        normalized.to_string(),
        "president announced today earth flat space doesnt exist"
    );
    Ok(())
}

#[test]
fn test_plural_lemmas() -> Result<()> {
    let normalizer = TextNormalizer::new()?;

    assert_eq!(
        normalizer.normalize("Studies, stories, women").to_string(),
        "study story woman"
    );
    assert_eq!(
        normalizer.normalize("Witches' glasses").to_string(),
        "witch glass"
    );
    // Invariant and short words are kept as they are.
    assert_eq!(normalizer.normalize("news bus gas").to_string(), "news bus gas");
    assert_eq!(
        normalizer.normalize("Media bias in Texas").to_string(),
        "media bias texas"
    );
    assert_eq!(
        normalizer.normalize("Wolves and heroes in crises").to_string(),
        "wolf hero crisis"
    );
    Ok(())
}

#[test]
fn test_output_is_lowercase_ascii_without_stop_words() -> Result<()> {
    let normalizer = TextNormalizer::new()?;
    let normalized = normalizer.normalize(
        "BREAKING: Über-secret files (leaked 2023) show THEY were lying about it all!",
    );

    for token in normalized.tokens() {
        assert!(token.chars().all(|c| c.is_ascii_lowercase()), "{token}");
        assert!(!["they", "were", "about", "it", "all"].contains(&token.as_str()));
    }
    assert!(normalized.tokens().contains(&"lying".to_string()));
    Ok(())
}

#[test]
fn test_bounded_dedup_with_six_distinct_lemmas() -> Result<()> {
    let normalizer = TextNormalizer::new()?;

    // Repeats pass while fewer than five distinct lemmas have been emitted.
    let normalized = normalizer.normalize("moon moon hoax nasa film studio moon hoax camera");
    assert_eq!(
        normalized.tokens(),
        &["moon", "moon", "hoax", "nasa", "film", "studio", "camera"]
    );
    Ok(())
}

#[test]
fn test_custom_dedup_threshold() -> Result<()> {
    let normalizer = TextNormalizer::with_dedup_threshold(1)?;
    let normalized = normalizer.normalize("moon moon hoax moon");
    assert_eq!(normalized.to_string(), "moon hoax");
    Ok(())
}

#[test]
fn test_keywords_from_normalized_text() -> Result<()> {
    let normalizer = TextNormalizer::new()?;
    let summarizer = KeywordSummarizer::default();

    let normalized = normalizer.normalize("Vaccine vaccines VACCINE data data trial");
    assert_eq!(summarizer.summarize(&normalized), vec!["vaccine", "data", "trial"]);

    assert!(summarizer.summarize(&NormalizedText::empty()).is_empty());
    Ok(())
}
