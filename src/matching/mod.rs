//! Rule-based recommendation engine.
//!
//! Four independent, stateless matchers, each constructed over one table of
//! the [`RuleCatalog`](crate::catalog::store::RuleCatalog):
//!
//! - [`ConceptMerger`]: Two concept labels to a project idea
//! - [`CostOptimizer`]: Components to cheaper alternatives and total savings
//! - [`EquipmentMatcher`]: Equipment, skill level and budget to project suggestions
//! - [`ChatResponder`]: A chat message to a canned assistant reply
//!
//! [`RecommendationEngine`] bundles all four over a single catalog.
//!
//! ## Rule Evaluation
//!
//! Rules are evaluated in catalog order:
//!
//! 1. **Concepts**: exact lookup of the unordered, normalized pair, else the
//!    templated fallback idea
//! 2. **Pricing**: first rule whose matcher accepts the component
//! 3. **Equipment**: every rule matching any equipment entry contributes its
//!    project; then budget/skill filtering; then truncation
//! 4. **Chat**: first rule with a keyword in the message, else the fallback
//!
//! ## Example
//!
//! ```rust,no_run
//! use craft_advisor::{RecommendationEngine, RuleCatalog};
//!
//! let catalog = RuleCatalog::load_embedded().unwrap();
//! let engine = RecommendationEngine::new(&catalog);
//!
//! let idea = engine.merge("flying", "robot").unwrap();
//! println!("{} (synergy {}%)", idea.title, idea.synergy_score);
//!
//! let report = engine.suggest(&["Arduino Uno"], "beginner", 50.0);
//! for s in &report.suggestions {
//!     println!("{}: ${}", s.title, s.estimated_cost);
//! }
//! ```
//!
//! [`ConceptMerger`]: concept::ConceptMerger
//! [`CostOptimizer`]: cost::CostOptimizer
//! [`EquipmentMatcher`]: equipment::EquipmentMatcher
//! [`ChatResponder`]: chat::ChatResponder
//! [`RecommendationEngine`]: engine::RecommendationEngine

pub mod chat;
pub mod concept;
pub mod cost;
pub mod engine;
pub mod equipment;
pub mod error;

pub use error::EngineError;
