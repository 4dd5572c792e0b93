use crate::models::MatchResult;

/// Cyclic cursor over returned match candidates
///
/// Only exists for a non-empty result list.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    results: Vec<MatchResult>,
    index: usize,
}

impl Carousel {
    pub fn new(results: Vec<MatchResult>) -> Option<Self> {
        if results.is_empty() {
            return None;
        }
        Some(Self { results, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn current(&self) -> &MatchResult {
        &self.results[self.index]
    }

    pub fn next(&mut self) -> &MatchResult {
        self.index = (self.index + 1) % self.results.len();
        self.current()
    }

    pub fn prev(&mut self) -> &MatchResult {
        self.index = (self.index + self.results.len() - 1) % self.results.len();
        self.current()
    }

    /// One-based "i / n" counter shown under the card
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.results.len())
    }
}
