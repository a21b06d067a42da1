use serde::{Deserialize, Serialize};

use crate::utils::validation::normalize_label;

/// How much experience a project demands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Whether a maker at `skill_level` should be shown a project of this difficulty.
    ///
    /// Beginner projects are open to everyone, other difficulties only to the
    /// skill level that names them, ignoring case. Only the exact level
    /// `"advanced"` sees everything; the level is never trimmed.
    #[must_use]
    pub fn is_suitable_for(self, skill_level: &str) -> bool {
        skill_level == "advanced"
            || self == Self::Beginner
            || self.as_str().to_lowercase() == skill_level.to_lowercase()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unordered, case-insensitive pair of concept labels used as a lookup key.
///
/// The two normalized labels are stored sorted, so `("Robot", "flying")` and
/// `("flying", "robot")` compare and hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConceptPair {
    first: String,
    second: String,
}

impl ConceptPair {
    pub fn new(a: &str, b: &str) -> Self {
        let a = normalize_label(a);
        let b = normalize_label(b);
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    #[must_use]
    pub fn labels(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }
}

impl std::fmt::Display for ConceptPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_pair_is_unordered() {
        assert_eq!(
            ConceptPair::new("flying", "robot"),
            ConceptPair::new("robot", "flying")
        );
    }

    #[test]
    fn test_concept_pair_normalizes_case_and_whitespace() {
        let pair = ConceptPair::new("  Flying ", "ROBOT");
        assert_eq!(pair.labels(), ("flying", "robot"));
        assert_eq!(pair.to_string(), "flying + robot");
    }

    #[test]
    fn test_difficulty_serializes_capitalized() {
        let json = serde_json::to_string(&Difficulty::Intermediate).unwrap();
        assert_eq!(json, "\"Intermediate\"");
        let parsed: Difficulty = serde_json::from_str("\"Advanced\"").unwrap();
        assert_eq!(parsed, Difficulty::Advanced);
    }

    #[test]
    fn test_beginner_projects_suit_every_level() {
        for level in ["beginner", "intermediate", "advanced", "expert"] {
            assert!(Difficulty::Beginner.is_suitable_for(level));
        }
    }

    #[test]
    fn test_intermediate_requires_matching_level() {
        assert!(Difficulty::Intermediate.is_suitable_for("intermediate"));
        assert!(Difficulty::Intermediate.is_suitable_for("Intermediate"));
        assert!(!Difficulty::Intermediate.is_suitable_for("beginner"));
    }

    #[test]
    fn test_advanced_level_sees_everything() {
        assert!(Difficulty::Advanced.is_suitable_for("advanced"));
        assert!(Difficulty::Intermediate.is_suitable_for("advanced"));
        assert!(!Difficulty::Advanced.is_suitable_for("intermediate"));
    }

    #[test]
    fn test_only_exact_advanced_sees_everything() {
        for level in ["Advanced", "ADVANCED", " advanced "] {
            assert!(!Difficulty::Intermediate.is_suitable_for(level), "{level:?}");
        }
        // Difficulty still matches its own level case-insensitively
        assert!(Difficulty::Advanced.is_suitable_for("ADVANCED"));
        assert!(!Difficulty::Advanced.is_suitable_for(" advanced "));
    }

    #[test]
    fn test_skill_level_is_not_trimmed() {
        assert!(!Difficulty::Intermediate.is_suitable_for(" intermediate "));
        assert!(Difficulty::Beginner.is_suitable_for(" intermediate "));
    }
}
