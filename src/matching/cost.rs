use crate::catalog::rules::PriceTable;
use crate::core::component::{ComponentOptimization, CostReport};
use crate::matching::error::EngineError;
use crate::utils::format::{render_template, whole_percent};
use crate::utils::validation::require_items;

/// Finds cheaper alternatives for a list of components
pub struct CostOptimizer<'a> {
    table: &'a PriceTable,
}

impl<'a> CostOptimizer<'a> {
    pub fn new(table: &'a PriceTable) -> Self {
        Self { table }
    }

    /// Suggest a substitute for every component, in input order.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if `components` is empty, or
    /// `EngineError::InternalFault` if the price table cannot price a component.
    pub fn optimize<S: AsRef<str>>(&self, components: &[S]) -> Result<CostReport, EngineError> {
        require_items("components", components)?;

        let optimizations = components
            .iter()
            .map(|component| self.optimize_component(component.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let report = CostReport::from_optimizations(optimizations);
        tracing::debug!(
            "Optimized {} components, saving {:.2} ({}%)",
            report.optimizations.len(),
            report.total_savings,
            report.total_savings_percent
        );
        Ok(report)
    }

    /// Apply the first matching price rule to a single component.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InternalFault` if no rule matches or the matching
    /// rule's prices cannot produce a saving.
    pub fn optimize_component(&self, component: &str) -> Result<ComponentOptimization, EngineError> {
        let rule = self.table.classify(component).ok_or_else(|| {
            EngineError::InternalFault(format!("no pricing rule matches component '{component}'"))
        })?;

        let savings = rule.original_price - rule.optimized_price;
        if savings < 0.0 {
            return Err(EngineError::InternalFault(format!(
                "pricing rule '{}' raises the price of '{component}'",
                rule.matcher
            )));
        }
        let savings_percent = whole_percent(savings, rule.original_price).ok_or_else(|| {
            EngineError::InternalFault(format!(
                "pricing rule '{}' has no positive original price",
                rule.matcher
            ))
        })?;

        Ok(ComponentOptimization {
            original: component.to_string(),
            alternative: render_template(&rule.alternative, &[("component", component)]),
            original_price: rule.original_price,
            optimized_price: rule.optimized_price,
            savings,
            savings_percent,
        })
    }
}
