//! Ranked extraction of dictionary entries.

use std::cmp::Ordering;

use serde::Serialize;

/// A word together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
}

impl WordFrequency {
    #[must_use]
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Ranking order for top-N output.
///
/// Higher counts sort first; equal counts fall back to ascending ordinal
/// word order. `Ordering::Equal` only when both fields match.
#[must_use]
pub fn rank_order(a: &WordFrequency, b: &WordFrequency) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.word.as_str().cmp(b.word.as_str()))
}

/// Sort `entries` by [`rank_order`] and keep the first `n`.
pub(crate) fn take_top(mut entries: Vec<WordFrequency>, n: usize) -> Vec<WordFrequency> {
    if n == 0 {
        return Vec::new();
    }
    // Only the first `n` need to be ordered; partition before sorting when
    // that saves work on large vocabularies.
    if n < entries.len() {
        entries.select_nth_unstable_by(n - 1, rank_order);
        entries.truncate(n);
    }
    entries.sort_by(rank_order);
    entries
}
