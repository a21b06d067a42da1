//! Core data types for the recommendation engine.
//!
//! - [`Difficulty`]: How demanding a project is (Beginner, Intermediate, Advanced)
//! - [`ConceptPair`]: Unordered, case-insensitive key for concept lookups
//! - [`MergeResult`]: A project idea produced by merging two concepts
//! - [`ComponentOptimization`], [`CostReport`]: Cheaper substitutes for components
//! - [`ProjectSuggestion`], [`SuggestionReport`]: Projects for a given equipment inventory
//!
//! None of these have identity or a lifecycle beyond the call that built them.
//!
//! [`Difficulty`]: types::Difficulty
//! [`ConceptPair`]: types::ConceptPair
//! [`MergeResult`]: idea::MergeResult
//! [`ComponentOptimization`]: component::ComponentOptimization
//! [`CostReport`]: component::CostReport
//! [`ProjectSuggestion`]: project::ProjectSuggestion
//! [`SuggestionReport`]: project::SuggestionReport

pub mod component;
pub mod idea;
pub mod project;
pub mod types;
