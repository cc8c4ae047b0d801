//! Keyword-count classifier used when no trained model is loaded.
//!
//! Every keyword is counted as a non-overlapping, case-insensitive substring
//! of the raw passage. With `F` fake hits and `R` real hits:
//!
//! - `F + R == 0` gives a neutral verdict at 50%
//! - a fake share above the threshold gives "fake" at that share
//! - anything else gives "real" at the complementary share

use serde::Serialize;

use crate::classify::Verdict;
use crate::config::HeuristicConfig;
use crate::model::NEUTRAL_CONFIDENCE;
use crate::util::round2;

/// Outcome of the keyword heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeuristicScore {
    pub verdict: Verdict,
    pub confidence: f64,
    pub fake_hits: usize,
    pub real_hits: usize,
}

/// Keyword-frequency fallback classifier.
#[derive(Debug, Clone)]
pub struct HeuristicFallback {
    fake_keywords: Vec<String>,
    real_keywords: Vec<String>,
    fake_threshold: f64,
}

impl Default for HeuristicFallback {
    fn default() -> Self {
        Self::new(&HeuristicConfig::default())
    }
}

impl HeuristicFallback {
    pub fn new(config: &HeuristicConfig) -> Self {
        let lowercase = |keywords: &[String]| {
            keywords
                .iter()
                .map(|kw| kw.to_lowercase())
                .filter(|kw| !kw.is_empty())
                .collect()
        };

        HeuristicFallback {
            fake_keywords: lowercase(&config.fake_keywords),
            real_keywords: lowercase(&config.real_keywords),
            fake_threshold: config.fake_threshold,
        }
    }

    /// Score the raw passage.
    pub fn classify(&self, raw: &str) -> HeuristicScore {
        let text = raw.to_lowercase();
        let fake_hits = Self::count_hits(&text, &self.fake_keywords);
        let real_hits = Self::count_hits(&text, &self.real_keywords);
        let total = fake_hits + real_hits;

        if total == 0 {
            return HeuristicScore {
                verdict: Verdict::Neutral,
                confidence: NEUTRAL_CONFIDENCE,
                fake_hits,
                real_hits,
            };
        }

        let fake_pct = fake_hits as f64 / total as f64 * 100.0;
        let (verdict, confidence) = if fake_pct > self.fake_threshold {
            (Verdict::Fake, round2(fake_pct))
        } else {
            (Verdict::Real, round2(100.0 - fake_pct))
        };

        HeuristicScore {
            verdict,
            confidence,
            fake_hits,
            real_hits,
        }
    }

    fn count_hits(text: &str, keywords: &[String]) -> usize {
        keywords.iter().map(|kw| text.matches(kw.as_str()).count()).sum()
    }
}
