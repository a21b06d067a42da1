use serde::{Deserialize, Serialize};

use crate::core::types::Difficulty;

/// A project idea synthesized from two concepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeResult {
    pub title: String,

    /// How naturally the two concepts combine (0-100)
    pub synergy_score: u8,

    /// How novel the resulting project is (0-100)
    pub innovation_score: u8,

    /// How realistic the project is for a hobbyist (0-100)
    pub feasibility_score: u8,

    pub description: String,

    /// Estimated build cost in dollars
    pub estimated_cost: u32,

    pub difficulty: Difficulty,

    /// Main parts, in build order
    pub key_components: Vec<String>,
}

impl MergeResult {
    /// All three scores, in (synergy, innovation, feasibility) order
    #[must_use]
    pub fn scores(&self) -> (u8, u8, u8) {
        (
            self.synergy_score,
            self.innovation_score,
            self.feasibility_score,
        )
    }
}
