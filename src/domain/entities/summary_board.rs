//! Summaries of the current generation round and their generated code.

use std::collections::HashMap;

use super::Summary;

/// Summaries with generated test code keyed by summary index.
///
/// Code entries only live as long as the summaries they were generated for:
/// every replacement of the summaries drops all code and bumps the round.
#[derive(Debug, Clone, Default)]
pub struct SummaryBoard {
    summaries: Vec<Summary>,
    codes: HashMap<usize, String>,
    round: u64,
}

impl SummaryBoard {
    /// Creates empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces summaries, dropping generated code.
    pub fn replace(&mut self, summaries: Vec<Summary>) {
        self.summaries = summaries;
        self.codes.clear();
        self.round += 1;
    }

    /// Removes all summaries and generated code.
    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    /// Returns the current round number.
    #[must_use]
    pub const fn round(&self) -> u64 {
        self.round
    }

    /// Stores code for a summary of the given round.
    ///
    /// Returns false and stores nothing if the round is stale or the index
    /// is out of range.
    pub fn store_code(&mut self, round: u64, index: usize, code: impl Into<String>) -> bool {
        if round != self.round || index >= self.summaries.len() {
            return false;
        }
        self.codes.insert(index, code.into());
        true
    }

    /// Returns code generated for the summary at `index`.
    #[must_use]
    pub fn code(&self, index: usize) -> Option<&str> {
        self.codes.get(&index).map(String::as_str)
    }

    /// Returns summary at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Summary> {
        self.summaries.get(index)
    }

    /// Returns all summaries in order.
    #[must_use]
    pub fn summaries(&self) -> &[Summary] {
        &self.summaries
    }

    /// Returns whether there are no summaries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Returns number of summaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.summaries.len()
    }
}
