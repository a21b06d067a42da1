use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::idea::MergeResult;
use crate::core::project::ProjectSuggestion;
use crate::core::types::ConceptPair;

/// Predicate deciding whether a rule applies to a piece of caller text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Matcher {
    /// Case-insensitive substring match
    Contains { needle: String },
    /// Matches any text; used as the catch-all at the end of a rule list
    Always,
}

impl Matcher {
    pub fn contains(needle: impl Into<String>) -> Self {
        Self::Contains {
            needle: needle.into().to_lowercase(),
        }
    }

    /// Lowercase a deserialized needle so `matches` can compare it directly
    pub fn normalize(&mut self) {
        if let Self::Contains { needle } = self {
            *needle = needle.to_lowercase();
        }
    }

    /// Expects a normalized needle, as built by [`Matcher::contains`] or a loaded catalog
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Contains { needle } => text.to_lowercase().contains(needle.as_str()),
            Self::Always => true,
        }
    }
}

impl std::fmt::Display for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contains { needle } => write!(f, "contains \"{needle}\""),
            Self::Always => write!(f, "always"),
        }
    }
}

/// A hand-curated concept combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    pub concepts: [String; 2],
    pub idea: MergeResult,
}

impl Combination {
    #[must_use]
    pub fn pair(&self) -> ConceptPair {
        ConceptPair::new(&self.concepts[0], &self.concepts[1])
    }
}

/// Known concept combinations plus the templated fallback idea.
///
/// The fallback's `title` and `description` may use `{concept1}`/`{concept2}`
/// (trimmed caller input) and `{Concept1}`/`{Concept2}` (title-cased).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeTable {
    pub combinations: Vec<Combination>,
    pub fallback: MergeResult,

    /// Index: normalized pair -> index in combinations vec
    #[serde(skip)]
    pair_to_index: HashMap<ConceptPair, usize>,
}

impl MergeTable {
    pub fn new(combinations: Vec<Combination>, fallback: MergeResult) -> Self {
        let mut table = Self {
            combinations,
            fallback,
            pair_to_index: HashMap::new(),
        };
        table.rebuild_index();
        table
    }

    /// Rebuild the pair index. When two combinations share a pair the first one wins.
    pub fn rebuild_index(&mut self) {
        self.pair_to_index.clear();
        for (index, combination) in self.combinations.iter().enumerate() {
            self.pair_to_index
                .entry(combination.pair())
                .or_insert(index);
        }
    }

    #[must_use]
    pub fn lookup(&self, pair: &ConceptPair) -> Option<&MergeResult> {
        self.pair_to_index
            .get(pair)
            .map(|&idx| &self.combinations[idx].idea)
    }
}

/// One substitution rule: components matching `matcher` can be replaced by `alternative`.
///
/// `alternative` may use the `{component}` placeholder for the caller's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRule {
    pub matcher: Matcher,
    pub alternative: String,
    pub original_price: f64,
    pub optimized_price: f64,
}

/// Priority-ordered substitution rules; the first matching rule wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    pub rules: Vec<PriceRule>,
}

impl PriceTable {
    /// The rule that applies to `component`, if any
    #[must_use]
    pub fn classify(&self, component: &str) -> Option<&PriceRule> {
        self.rules.iter().find(|rule| rule.matcher.matches(component))
    }
}

/// A project offered when any equipment entry matches `matcher`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRule {
    pub matcher: Matcher,
    pub project: ProjectSuggestion,
}

impl CandidateRule {
    #[must_use]
    pub fn matches_any(&self, equipment: &[String]) -> bool {
        equipment.iter().any(|item| self.matcher.matches(item))
    }
}

/// Candidate projects in offer order, and the set used when none apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentTable {
    pub candidates: Vec<CandidateRule>,
    pub defaults: Vec<ProjectSuggestion>,
}

/// A canned assistant reply, chosen when any keyword occurs in the message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRule {
    pub topic: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub response: String,
}

impl ChatRule {
    #[must_use]
    pub fn matches(&self, message: &str) -> bool {
        let message = message.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| message.contains(&keyword.to_lowercase()))
    }
}

/// Priority-ordered chat rules plus the reply used when nothing matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTable {
    pub rules: Vec<ChatRule>,
    pub fallback: ChatRule,
}

impl ChatTable {
    /// First rule whose keywords occur in `message`, else the fallback
    #[must_use]
    pub fn select(&self, message: &str) -> &ChatRule {
        self.rules
            .iter()
            .find(|rule| rule.matches(message))
            .unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Difficulty;

    fn idea(title: &str) -> MergeResult {
        MergeResult {
            title: title.to_string(),
            synergy_score: 50,
            innovation_score: 50,
            feasibility_score: 50,
            description: String::new(),
            estimated_cost: 10,
            difficulty: Difficulty::Beginner,
            key_components: Vec::new(),
        }
    }

    fn price_rule(matcher: Matcher, alternative: &str) -> PriceRule {
        PriceRule {
            matcher,
            alternative: alternative.to_string(),
            original_price: 10.0,
            optimized_price: 5.0,
        }
    }

    #[test]
    fn test_matcher_is_case_insensitive() {
        let matcher = Matcher::contains("Raspberry Pi");
        assert!(matcher.matches("raspberry pi 4 model b"));
        assert!(matcher.matches("My RASPBERRY PI"));
        assert!(!matcher.matches("raspberry"));
        assert!(Matcher::Always.matches(""));
    }

    #[test]
    fn test_normalize_lowercases_deserialized_needle() {
        let mut matcher: Matcher =
            serde_json::from_str(r#"{"kind":"contains","needle":"Raspberry Pi"}"#).unwrap();
        matcher.normalize();
        assert_eq!(matcher, Matcher::contains("raspberry pi"));
        assert!(matcher.matches("RASPBERRY PI 5"));
    }

    #[test]
    fn test_matcher_json_shape() {
        let json = serde_json::to_string(&Matcher::contains("camera")).unwrap();
        assert_eq!(json, r#"{"kind":"contains","needle":"camera"}"#);
        let always: Matcher = serde_json::from_str(r#"{"kind":"always"}"#).unwrap();
        assert_eq!(always, Matcher::Always);
    }

    #[test]
    fn test_merge_table_lookup_ignores_order_and_case() {
        let table = MergeTable::new(
            vec![Combination {
                concepts: ["Flying".to_string(), "robot".to_string()],
                idea: idea("Drone"),
            }],
            idea("Fallback"),
        );

        let found = table.lookup(&ConceptPair::new("ROBOT", " flying "));
        assert_eq!(found.map(|i| i.title.as_str()), Some("Drone"));
        assert!(table.lookup(&ConceptPair::new("robot", "plant")).is_none());
    }

    #[test]
    fn test_merge_table_first_duplicate_wins() {
        let table = MergeTable::new(
            vec![
                Combination {
                    concepts: ["a".to_string(), "b".to_string()],
                    idea: idea("First"),
                },
                Combination {
                    concepts: ["b".to_string(), "a".to_string()],
                    idea: idea("Second"),
                },
            ],
            idea("Fallback"),
        );
        assert_eq!(
            table.lookup(&ConceptPair::new("a", "b")).unwrap().title,
            "First"
        );
    }

    #[test]
    fn test_price_table_first_match_wins() {
        let table = PriceTable {
            rules: vec![
                price_rule(Matcher::contains("arduino"), "board"),
                price_rule(Matcher::contains("sensor"), "sensor"),
                price_rule(Matcher::Always, "Generic {component}"),
            ],
        };

        assert_eq!(
            table.classify("Arduino Sensor Kit").unwrap().alternative,
            "board"
        );
        assert_eq!(table.classify("PIR sensor").unwrap().alternative, "sensor");
        assert_eq!(
            table.classify("servo").unwrap().matcher,
            Matcher::Always
        );
    }

    #[test]
    fn test_price_table_without_catch_all() {
        let table = PriceTable {
            rules: vec![price_rule(Matcher::contains("arduino"), "board")],
        };
        assert!(table.classify("servo").is_none());
    }

    #[test]
    fn test_chat_table_selects_in_priority_order() {
        let table = ChatTable {
            rules: vec![
                ChatRule {
                    topic: "cost".to_string(),
                    keywords: vec!["cheap".to_string()],
                    response: "save".to_string(),
                },
                ChatRule {
                    topic: "robot".to_string(),
                    keywords: vec!["robot".to_string()],
                    response: "beep".to_string(),
                },
            ],
            fallback: ChatRule {
                topic: "help".to_string(),
                keywords: Vec::new(),
                response: "hi".to_string(),
            },
        };

        assert_eq!(table.select("A CHEAP robot?").topic, "cost");
        assert_eq!(table.select("robot arm").topic, "robot");
        assert_eq!(table.select("hello").topic, "help");
    }
}
