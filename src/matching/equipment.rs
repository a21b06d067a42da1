use crate::catalog::rules::EquipmentTable;
use crate::core::project::{ProjectSuggestion, SuggestionReport};
use crate::utils::validation::normalize_label;

/// Skill level assumed when the caller does not give one
pub const DEFAULT_SKILL_LEVEL: &str = "beginner";

/// Budget in dollars assumed when the caller does not give one
pub const DEFAULT_BUDGET: f64 = 100.0;

/// Default cap on returned suggestions
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Configuration for the equipment matcher
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Maximum number of suggestions returned; `total_matches` is not capped
    pub max_suggestions: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Suggests projects that fit a maker's equipment, skill level, and budget.
///
/// Matching runs in three phases that are public so each can be checked on its own:
/// [`generate_candidates`](Self::generate_candidates), [`filter_candidates`], and
/// [`truncate`](Self::truncate).
pub struct EquipmentMatcher<'a> {
    table: &'a EquipmentTable,
    config: SuggestConfig,
}

impl<'a> EquipmentMatcher<'a> {
    /// Create a matcher with default configuration
    pub fn new(table: &'a EquipmentTable) -> Self {
        Self {
            table,
            config: SuggestConfig::default(),
        }
    }

    /// Create a matcher with custom configuration
    pub fn with_config(table: &'a EquipmentTable, config: SuggestConfig) -> Self {
        Self { table, config }
    }

    /// Suggest projects. Never fails: unknown or missing equipment falls back to
    /// the table's default projects.
    pub fn suggest<S: AsRef<str>>(
        &self,
        equipment: &[S],
        skill_level: &str,
        budget: f64,
    ) -> SuggestionReport {
        let candidates = self.generate_candidates(equipment);
        let filtered = filter_candidates(candidates, skill_level, budget);
        let report = self.truncate(filtered);

        tracing::debug!(
            "Suggested {} of {} matching projects (skill: {}, budget: {})",
            report.suggestions.len(),
            report.total_matches,
            skill_level,
            budget
        );
        report
    }

    /// Every candidate whose rule matches any equipment entry, in table order.
    /// When none match, the table's default projects instead.
    pub fn generate_candidates<S: AsRef<str>>(&self, equipment: &[S]) -> Vec<ProjectSuggestion> {
        let equipment: Vec<String> = equipment
            .iter()
            .map(|item| normalize_label(item.as_ref()))
            .collect();

        let matched: Vec<ProjectSuggestion> = self
            .table
            .candidates
            .iter()
            .filter(|rule| rule.matches_any(&equipment))
            .map(|rule| rule.project.clone())
            .collect();

        if matched.is_empty() {
            tracing::debug!("No equipment rule matched, offering default projects");
            return self.table.defaults.clone();
        }
        matched
    }

    /// Cap the filtered list, remembering how many there were
    #[must_use]
    pub fn truncate(&self, filtered: Vec<ProjectSuggestion>) -> SuggestionReport {
        let total_matches = filtered.len();
        let suggestions = filtered
            .into_iter()
            .take(self.config.max_suggestions)
            .collect();

        SuggestionReport {
            suggestions,
            total_matches,
        }
    }
}

/// Keep candidates within `budget` whose difficulty suits `skill_level`, preserving order
#[must_use]
pub fn filter_candidates(
    candidates: Vec<ProjectSuggestion>,
    skill_level: &str,
    budget: f64,
) -> Vec<ProjectSuggestion> {
    candidates
        .into_iter()
        .filter(|project| {
            project.fits_budget(budget) && project.difficulty.is_suitable_for(skill_level)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::rules::{CandidateRule, Matcher};
    use crate::catalog::store::RuleCatalog;
    use crate::core::types::Difficulty;

    fn embedded() -> RuleCatalog {
        RuleCatalog::load_embedded().unwrap()
    }

    fn titles(report: &SuggestionReport) -> Vec<&str> {
        report
            .suggestions
            .iter()
            .map(|s| s.title.as_str())
            .collect()
    }

    fn project(title: &str, estimated_cost: u32, difficulty: Difficulty) -> ProjectSuggestion {
        ProjectSuggestion {
            title: title.to_string(),
            match_score: 80,
            required_additional: Vec::new(),
            estimated_cost,
            difficulty,
            description: String::new(),
        }
    }

    #[test]
    fn test_empty_equipment_uses_defaults() {
        let catalog = embedded();
        let matcher = EquipmentMatcher::new(&catalog.equipment);

        let none: [&str; 0] = [];
        let report = matcher.suggest(&none, "beginner", 100.0);
        assert_eq!(
            titles(&report),
            vec!["Basic LED Circuit", "Temperature Monitor"]
        );
        assert_eq!(report.total_matches, 2);
    }

    #[test]
    fn test_unrecognized_equipment_uses_defaults() {
        let catalog = embedded();
        let matcher = EquipmentMatcher::new(&catalog.equipment);

        let candidates = matcher.generate_candidates(&["soldering iron", "multimeter"]);
        assert_eq!(candidates, catalog.equipment.defaults);
    }

    #[test]
    fn test_budget_filter() {
        let catalog = embedded();
        let matcher = EquipmentMatcher::new(&catalog.equipment);

        let report = matcher.suggest(&["arduino"], "beginner", 10.0);
        assert!(report.suggestions.is_empty());
        assert_eq!(report.total_matches, 0);
    }

    #[test]
    fn test_budget_is_inclusive() {
        let catalog = embedded();
        let matcher = EquipmentMatcher::new(&catalog.equipment);

        let report = matcher.suggest(&["Arduino Uno"], "beginner", 25.0);
        assert_eq!(titles(&report), vec!["LED Matrix Display"]);
    }

    #[test]
    fn test_advanced_bypasses_difficulty() {
        let catalog = embedded();
        let matcher = EquipmentMatcher::new(&catalog.equipment);

        let report = matcher.suggest(&["arduino"], "advanced", 1000.0);
        assert_eq!(titles(&report), vec!["LED Matrix Display"]);

        let report = matcher.suggest(
            &["Arduino Mega", "Raspberry Pi 4", "USB Camera"],
            "advanced",
            1000.0,
        );
        assert_eq!(
            titles(&report),
            vec![
                "LED Matrix Display",
                "Home Automation Hub",
                "Smart Security Camera"
            ]
        );
    }

    #[test]
    fn test_advanced_bypass_is_case_sensitive() {
        let catalog = embedded();
        let matcher = EquipmentMatcher::new(&catalog.equipment);

        let report = matcher.suggest(&["raspberry pi"], "Advanced", 1000.0);
        assert!(report.suggestions.is_empty());
        assert_eq!(report.total_matches, 0);

        for level in ["ADVANCED", " advanced "] {
            let report = matcher.suggest(&["raspberry pi", "camera"], level, 1000.0);
            assert!(report.suggestions.is_empty(), "{level:?}");
        }

        let report = matcher.suggest(&["raspberry pi"], " intermediate ", 1000.0);
        assert_eq!(report.total_matches, 0);
    }

    #[test]
    fn test_beginner_skips_intermediate_projects() {
        let catalog = embedded();
        let matcher = EquipmentMatcher::new(&catalog.equipment);

        let report = matcher.suggest(&["arduino", "raspberry pi", "camera"], "beginner", 1000.0);
        assert_eq!(titles(&report), vec!["LED Matrix Display"]);
        assert_eq!(report.total_matches, 1);

        let report =
            matcher.suggest(&["arduino", "raspberry pi", "camera"], "intermediate", 1000.0);
        assert_eq!(report.total_matches, 3);
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        let catalog = embedded();
        let matcher = EquipmentMatcher::new(&catalog.equipment);

        let candidates =
            matcher.generate_candidates(&["My RASPBERRY PI 400", "USB Camera Module"]);
        let names: Vec<&str> = candidates.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(names, vec!["Home Automation Hub", "Smart Security Camera"]);
    }

    #[test]
    fn test_each_rule_contributes_once() {
        let catalog = embedded();
        let matcher = EquipmentMatcher::new(&catalog.equipment);

        let candidates = matcher.generate_candidates(&["arduino uno", "arduino nano"]);
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_filter_preserves_order() {
        let filtered = filter_candidates(
            vec![
                project("a", 10, Difficulty::Beginner),
                project("b", 500, Difficulty::Beginner),
                project("c", 10, Difficulty::Advanced),
                project("d", 20, Difficulty::Intermediate),
            ],
            "intermediate",
            100.0,
        );
        let names: Vec<&str> = filtered.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(names, vec!["a", "d"]);
    }

    #[test]
    fn test_truncation_reports_full_count() {
        let table = EquipmentTable {
            candidates: (0..7)
                .map(|i| CandidateRule {
                    matcher: Matcher::contains(format!("tool{i}")),
                    project: project(&format!("Project {i}"), 10, Difficulty::Beginner),
                })
                .collect(),
            defaults: Vec::new(),
        };
        let matcher = EquipmentMatcher::new(&table);

        let equipment: Vec<String> = (0..7).map(|i| format!("Tool{i}")).collect();
        let report = matcher.suggest(&equipment, "beginner", 100.0);

        assert_eq!(report.suggestions.len(), 5);
        assert_eq!(report.total_matches, 7);
        assert!(report.is_truncated());
        assert_eq!(report.suggestions[0].title, "Project 0");
        assert_eq!(report.suggestions[4].title, "Project 4");
    }

    #[test]
    fn test_custom_max_suggestions() {
        let catalog = embedded();
        let matcher = EquipmentMatcher::with_config(
            &catalog.equipment,
            SuggestConfig { max_suggestions: 1 },
        );

        let none: [&str; 0] = [];
        let report = matcher.suggest(&none, "beginner", 100.0);
        assert_eq!(titles(&report), vec!["Basic LED Circuit"]);
        assert_eq!(report.total_matches, 2);
    }

    #[test]
    fn test_suggest_is_idempotent() {
        let catalog = embedded();
        let matcher = EquipmentMatcher::new(&catalog.equipment);

        let first = matcher.suggest(&["camera"], "intermediate", 50.0);
        let second = matcher.suggest(&["camera"], "intermediate", 50.0);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
