//! # craft-advisor
//!
//! A rule-based recommendation engine for DIY electronics and maker projects.
//!
//! Makers rarely start from a blank page: they have a couple of ideas they want
//! to combine, a parts list they want to build cheaper, or a drawer of boards
//! they want to put to use. `craft-advisor` answers those three questions from a
//! small, curated rule catalog, with no model and no network calls.
//!
//! ## Features
//!
//! - **Concept merging**: Combine two concept labels into a scored project idea
//! - **Cost optimization**: Swap components for cheaper compatible alternatives
//! - **Equipment matching**: Suggest projects for the hardware you already own,
//!   filtered by skill level and budget
//! - **Chat replies**: Keyword-driven assistant answers
//! - **Custom catalogs**: Every rule lives in JSON and can be replaced
//!
//! ## Example
//!
//! ```rust,no_run
//! use craft_advisor::{RecommendationEngine, RuleCatalog};
//!
//! // Load the embedded catalog of rules
//! let catalog = RuleCatalog::load_embedded().unwrap();
//! let engine = RecommendationEngine::new(&catalog);
//!
//! let idea = engine.merge("plant", "monitoring").unwrap();
//! println!("{}: ${}", idea.title, idea.estimated_cost);
//!
//! let report = engine.optimize(&["Arduino Uno", "PIR sensor"]).unwrap();
//! println!("Save ${:.2} ({}%)", report.total_savings, report.total_savings_percent);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Rule catalog storage and validation
//! - [`core`]: Result types shared by the engines
//! - [`matching`]: The concept, cost, equipment and chat matchers
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: JSON HTTP API

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::store::RuleCatalog;
pub use core::component::{ComponentOptimization, CostReport};
pub use core::idea::MergeResult;
pub use core::project::{ProjectSuggestion, SuggestionReport};
pub use core::types::*;
pub use matching::chat::ChatReply;
pub use matching::engine::{EngineConfig, RecommendationEngine};
pub use matching::EngineError;
