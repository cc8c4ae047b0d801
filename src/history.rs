//! Bounded record of recent predictions.
//!
//! The history belongs to the caller (the CLI session command keeps one per
//! session). Newest entries come first and only the last few are kept.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::classify::ClassificationResult;

/// Number of entries kept by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Characters of the passage kept in each entry.
pub const TEXT_PREFIX_LENGTH: usize = 100;

/// One remembered prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub text: String,
    pub message: String,
    pub confidence: f64,
    pub timestamp: DateTime<Local>,
}

/// Newest-first queue of the most recent successful predictions.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for PredictionHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl PredictionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PredictionHistory {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Remember `result` for `text`. Error results are not recorded.
    ///
    /// Returns whether an entry was added.
    pub fn record(&mut self, text: &str, result: &ClassificationResult) -> bool {
        self.record_at(text, result, Local::now())
    }

    fn record_at(
        &mut self,
        text: &str,
        result: &ClassificationResult,
        timestamp: DateTime<Local>,
    ) -> bool {
        if result.is_error() || self.capacity == 0 {
            return false;
        }

        self.entries.push_front(HistoryEntry {
            text: text.chars().take(TEXT_PREFIX_LENGTH).collect(),
            message: result.message().to_string(),
            confidence: result.confidence(),
            timestamp,
        });
        self.entries.truncate(self.capacity);
        true
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
