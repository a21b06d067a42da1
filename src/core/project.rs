use serde::{Deserialize, Serialize};

use crate::core::types::Difficulty;

/// A project proposed for a maker's existing equipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSuggestion {
    pub title: String,

    /// Suitability for the equipment on hand (0-100)
    pub match_score: u8,

    /// Parts the maker still needs to buy
    pub required_additional: Vec<String>,

    /// Estimated build cost in dollars
    pub estimated_cost: u32,

    pub difficulty: Difficulty,

    pub description: String,
}

impl ProjectSuggestion {
    #[must_use]
    pub fn fits_budget(&self, budget: f64) -> bool {
        f64::from(self.estimated_cost) <= budget
    }
}

/// Ranked suggestions plus the number of candidates that passed filtering.
///
/// `total_matches` counts every surviving candidate, so callers can detect
/// truncation with `suggestions.len() < total_matches`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionReport {
    pub suggestions: Vec<ProjectSuggestion>,
    pub total_matches: usize,
}

impl SuggestionReport {
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.suggestions.len() < self.total_matches
    }
}
