use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::catalog::rules::{ChatTable, EquipmentTable, Matcher, MergeTable, PriceTable};
use crate::core::idea::MergeResult;
use crate::core::project::ProjectSuggestion;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read rule catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse rule catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid rule in catalog: {0}")]
    InvalidRule(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Upper bound for every 0-100 score in the catalog
pub const MAX_SCORE: u8 = 100;

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub concepts: MergeTable,
    pub pricing: PriceTable,
    pub equipment: EquipmentTable,
    pub chat: ChatTable,
}

/// All rule tables the engines consult, validated and indexed
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    pub concepts: MergeTable,
    pub pricing: PriceTable,
    pub equipment: EquipmentTable,
    pub chat: ChatTable,
}

impl RuleCatalog {
    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/rules.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load from `path` when given, otherwise the embedded catalog
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                tracing::debug!("Loading rule catalog from {}", path.display());
                Self::load_from_file(path)
            }
            None => Self::load_embedded(),
        }
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Rule catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        let mut concepts = data.concepts;
        concepts.rebuild_index();

        let mut pricing = data.pricing;
        for rule in &mut pricing.rules {
            rule.matcher.normalize();
        }
        let mut equipment = data.equipment;
        for candidate in &mut equipment.candidates {
            candidate.matcher.normalize();
        }

        let catalog = Self {
            concepts,
            pricing,
            equipment,
            chat: data.chat,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            concepts: self.concepts.clone(),
            pricing: self.pricing.clone(),
            equipment: self.equipment.clone(),
            chat: self.chat.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Check every rule invariant the engines rely on.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidRule` describing the first violation.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (i, combination) in self.concepts.combinations.iter().enumerate() {
            if combination.concepts.iter().any(|c| c.trim().is_empty()) {
                return Err(CatalogError::InvalidRule(format!(
                    "combination {i} has a blank concept"
                )));
            }
            validate_idea(&combination.idea)?;
        }
        validate_idea(&self.concepts.fallback)?;

        for (i, rule) in self.pricing.rules.iter().enumerate() {
            validate_matcher(&rule.matcher, &format!("pricing rule {i}"))?;
            let prices_valid = rule.original_price.is_finite()
                && rule.optimized_price.is_finite()
                && rule.original_price > 0.0
                && rule.optimized_price >= 0.0;
            if !prices_valid {
                return Err(CatalogError::InvalidRule(format!(
                    "pricing rule {i} needs a positive original price and a non-negative optimized price"
                )));
            }
            if rule.optimized_price > rule.original_price {
                return Err(CatalogError::InvalidRule(format!(
                    "pricing rule {i} costs more after optimization ({} > {})",
                    rule.optimized_price, rule.original_price
                )));
            }
        }

        for (i, candidate) in self.equipment.candidates.iter().enumerate() {
            validate_matcher(&candidate.matcher, &format!("equipment candidate {i}"))?;
            validate_project(&candidate.project)?;
        }
        for project in &self.equipment.defaults {
            validate_project(project)?;
        }

        for rule in &self.chat.rules {
            if rule.keywords.is_empty() || rule.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(CatalogError::InvalidRule(format!(
                    "chat rule '{}' needs at least one non-blank keyword",
                    rule.topic
                )));
            }
        }

        Ok(())
    }

    /// Number of rules across all tables
    pub fn len(&self) -> usize {
        self.concepts.combinations.len()
            + self.pricing.rules.len()
            + self.equipment.candidates.len()
            + self.equipment.defaults.len()
            + self.chat.rules.len()
    }

    /// Check if catalog has no rules at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate_matcher(matcher: &Matcher, context: &str) -> Result<(), CatalogError> {
    match matcher {
        Matcher::Contains { needle } if needle.trim().is_empty() => Err(
            CatalogError::InvalidRule(format!("{context} has a blank needle")),
        ),
        _ => Ok(()),
    }
}

fn validate_idea(idea: &MergeResult) -> Result<(), CatalogError> {
    let (synergy, innovation, feasibility) = idea.scores();
    if synergy > MAX_SCORE || innovation > MAX_SCORE || feasibility > MAX_SCORE {
        return Err(CatalogError::InvalidRule(format!(
            "idea '{}' has a score above {MAX_SCORE}",
            idea.title
        )));
    }
    Ok(())
}

fn validate_project(project: &ProjectSuggestion) -> Result<(), CatalogError> {
    if project.match_score > MAX_SCORE {
        return Err(CatalogError::InvalidRule(format!(
            "project '{}' has a match score above {MAX_SCORE}",
            project.title
        )));
    }
    Ok(())
}
