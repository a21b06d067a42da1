use crate::catalog::store::RuleCatalog;
use crate::core::component::CostReport;
use crate::core::idea::MergeResult;
use crate::core::project::SuggestionReport;
use crate::matching::chat::{ChatReply, ChatResponder};
use crate::matching::concept::ConceptMerger;
use crate::matching::cost::CostOptimizer;
use crate::matching::equipment::{EquipmentMatcher, SuggestConfig};
use crate::matching::error::EngineError;

/// Configuration for the recommendation engine
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub suggest: SuggestConfig,
}

/// Entry point tying every matcher to one rule catalog
pub struct RecommendationEngine<'a> {
    catalog: &'a RuleCatalog,
    config: EngineConfig,
}

impl<'a> RecommendationEngine<'a> {
    /// Create a new engine with default configuration
    pub fn new(catalog: &'a RuleCatalog) -> Self {
        Self {
            catalog,
            config: EngineConfig::default(),
        }
    }

    /// Create a new engine with custom configuration
    pub fn with_config(catalog: &'a RuleCatalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// See [`ConceptMerger::merge`]
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if either concept is blank.
    pub fn merge(&self, concept1: &str, concept2: &str) -> Result<MergeResult, EngineError> {
        ConceptMerger::new(&self.catalog.concepts).merge(concept1, concept2)
    }

    /// See [`CostOptimizer::optimize`]
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` for an empty list, or
    /// `EngineError::InternalFault` if the catalog cannot price a component.
    pub fn optimize<S: AsRef<str>>(&self, components: &[S]) -> Result<CostReport, EngineError> {
        CostOptimizer::new(&self.catalog.pricing).optimize(components)
    }

    /// See [`EquipmentMatcher::suggest`]
    pub fn suggest<S: AsRef<str>>(
        &self,
        equipment: &[S],
        skill_level: &str,
        budget: f64,
    ) -> SuggestionReport {
        EquipmentMatcher::with_config(&self.catalog.equipment, self.config.suggest.clone())
            .suggest(equipment, skill_level, budget)
    }

    /// See [`ChatResponder::respond`]
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if the message is blank.
    pub fn respond(&self, message: &str) -> Result<ChatReply, EngineError> {
        ChatResponder::new(&self.catalog.chat).respond(message)
    }
}
