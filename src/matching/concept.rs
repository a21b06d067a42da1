use crate::catalog::rules::MergeTable;
use crate::core::idea::MergeResult;
use crate::core::types::ConceptPair;
use crate::matching::error::EngineError;
use crate::utils::format::{render_template, title_case};
use crate::utils::validation::require_text;

/// Synthesizes a project idea from two concept labels
pub struct ConceptMerger<'a> {
    table: &'a MergeTable,
}

impl<'a> ConceptMerger<'a> {
    pub fn new(table: &'a MergeTable) -> Self {
        Self { table }
    }

    /// Merge two concepts into one project idea.
    ///
    /// Known combinations are looked up regardless of order and case. Anything
    /// else gets the table's fallback idea with the concepts filled in.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if either concept is blank.
    pub fn merge(&self, concept1: &str, concept2: &str) -> Result<MergeResult, EngineError> {
        let concept1 = require_text("concept1", concept1)?;
        let concept2 = require_text("concept2", concept2)?;

        let pair = ConceptPair::new(concept1, concept2);
        if let Some(idea) = self.table.lookup(&pair) {
            tracing::debug!("Concept pair '{}' resolved to '{}'", pair, idea.title);
            return Ok(idea.clone());
        }

        tracing::debug!("No combination for '{}', synthesizing generic idea", pair);
        Ok(self.synthesize(concept1, concept2))
    }

    fn synthesize(&self, concept1: &str, concept2: &str) -> MergeResult {
        let title1 = title_case(concept1);
        let title2 = title_case(concept2);
        let values = [
            ("concept1", concept1),
            ("concept2", concept2),
            ("Concept1", title1.as_str()),
            ("Concept2", title2.as_str()),
        ];

        let fallback = &self.table.fallback;
        MergeResult {
            title: render_template(&fallback.title, &values),
            description: render_template(&fallback.description, &values),
            ..fallback.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::rules::Combination;
    use crate::catalog::store::RuleCatalog;
    use crate::core::types::Difficulty;

    fn embedded() -> RuleCatalog {
        RuleCatalog::load_embedded().unwrap()
    }

    #[test]
    fn test_known_pair_is_order_independent() {
        let catalog = embedded();
        let merger = ConceptMerger::new(&catalog.concepts);

        let forward = merger.merge("flying", "robot").unwrap();
        let backward = merger.merge("robot", "flying").unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.title, "Autonomous Flying Robot");
        assert_eq!(forward.scores(), (95, 85, 70));
        assert_eq!(forward.estimated_cost, 300);
        assert_eq!(forward.difficulty, Difficulty::Advanced);
        assert_eq!(
            forward.key_components,
            vec!["Flight Controller", "GPS Module", "Ultrasonic Sensors", "Camera"]
        );
    }

    #[test]
    fn test_known_pair_is_case_insensitive() {
        let catalog = embedded();
        let merger = ConceptMerger::new(&catalog.concepts);

        assert_eq!(
            merger.merge("Flying", "Robot").unwrap(),
            merger.merge("flying", "robot").unwrap()
        );
        assert_eq!(
            merger.merge("  SMART ", "Lighting").unwrap().title,
            "Intelligent Lighting System"
        );
        assert_eq!(
            merger.merge("monitoring", "Plant").unwrap().title,
            "Smart Plant Care System"
        );
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let catalog = embedded();
        let merger = ConceptMerger::new(&catalog.concepts);

        let first = merger.merge("foo", "bar").unwrap();
        let second = merger.merge("foo", "bar").unwrap();
        assert_eq!(first, second);

        assert_eq!(first.title, "Smart Foo Bar System");
        assert_eq!(first.scores(), (75, 70, 80));
        assert_eq!(first.estimated_cost, 150);
        assert_eq!(first.difficulty, Difficulty::Intermediate);
        assert_eq!(
            first.key_components,
            vec!["Microcontroller", "Sensors", "Actuators", "Power Supply"]
        );
        assert_eq!(
            first.description,
            "An innovative project combining foo and bar technologies"
        );
    }

    #[test]
    fn test_fallback_recapitalizes_concepts() {
        let catalog = embedded();
        let merger = ConceptMerger::new(&catalog.concepts);

        let idea = merger.merge("  wEATHER station", "SOLAR").unwrap();
        assert_eq!(idea.title, "Smart Weather Station Solar System");
        assert_eq!(
            idea.description,
            "An innovative project combining wEATHER station and SOLAR technologies"
        );
    }

    #[test]
    fn test_blank_concepts_are_rejected() {
        let catalog = embedded();
        let merger = ConceptMerger::new(&catalog.concepts);

        for (a, b) in [("", "robot"), ("flying", "   "), ("", "")] {
            let err = merger.merge(a, b).unwrap_err();
            assert!(matches!(err, EngineError::InvalidInput(_)), "{a:?} + {b:?}");
        }
    }

    #[test]
    fn test_custom_table_substitutes_knowledge() {
        let catalog = embedded();
        let mut fallback = catalog.concepts.fallback.clone();
        fallback.title = "{Concept2} meets {Concept1}".to_string();

        let mut custom_idea = catalog.concepts.fallback.clone();
        custom_idea.title = "Musical Tesla Coil".to_string();

        let table = MergeTable::new(
            vec![Combination {
                concepts: ["music".to_string(), "high voltage".to_string()],
                idea: custom_idea,
            }],
            fallback,
        );
        let merger = ConceptMerger::new(&table);

        assert_eq!(
            merger.merge("High Voltage", "music").unwrap().title,
            "Musical Tesla Coil"
        );
        assert_eq!(merger.merge("flying", "robot").unwrap().title, "Robot meets Flying");
    }
}
