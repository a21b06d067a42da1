use serde::{Deserialize, Serialize};

use crate::utils::format::round_to_tenth;

/// A cheaper substitute for one requested component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentOptimization {
    /// The component exactly as the caller wrote it
    pub original: String,
    pub alternative: String,
    pub original_price: f64,
    pub optimized_price: f64,
    /// Always `original_price - optimized_price`
    pub savings: f64,
    /// `savings / original_price` as a whole percentage
    pub savings_percent: u32,
}

/// Per-component substitutions and the aggregate saving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    pub optimizations: Vec<ComponentOptimization>,
    pub total_savings: f64,
    /// Percentage of the original spend saved, rounded to one decimal
    pub total_savings_percent: f64,
}

impl CostReport {
    #[must_use]
    pub fn from_optimizations(optimizations: Vec<ComponentOptimization>) -> Self {
        let total_savings: f64 = optimizations.iter().map(|o| o.savings).sum();
        let total_original: f64 = optimizations.iter().map(|o| o.original_price).sum();

        let total_savings_percent = if optimizations.is_empty() || total_original <= 0.0 {
            0.0
        } else {
            round_to_tenth(total_savings / total_original * 100.0)
        };

        Self {
            optimizations,
            total_savings,
            total_savings_percent,
        }
    }

    /// Sum of the prices before substitution
    #[must_use]
    pub fn total_original_price(&self) -> f64 {
        self.optimizations.iter().map(|o| o.original_price).sum()
    }
}
