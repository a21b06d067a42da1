//! Rule catalog storage.
//!
//! Every piece of engine knowledge lives in one JSON document: concept
//! combinations, component substitution rules, equipment-driven project
//! candidates, and chat replies. An embedded catalog is compiled into the
//! binary, but custom catalogs can also be loaded from JSON files.
//!
//! ## Embedded Catalog
//!
//! - **Concepts**: flying + robot, smart + lighting, plant + monitoring, and a
//!   templated fallback idea
//! - **Pricing**: Arduino, Raspberry Pi and sensor substitutions, then a
//!   catch-all "Generic ..." rule
//! - **Equipment**: Arduino, Raspberry Pi and camera projects, with two
//!   starter projects used when nothing matches
//! - **Chat**: keyword-triggered assistant replies
//!
//! Rules are ordered; where several rules could apply, the earlier one wins.
//!
//! ## Example
//!
//! ```rust,no_run
//! use craft_advisor::RuleCatalog;
//! use std::path::Path;
//!
//! // Load the embedded catalog and export it as a starting point
//! let catalog = RuleCatalog::load_embedded().unwrap();
//! let json = catalog.to_json().unwrap();
//!
//! // Load a customized copy
//! let custom = RuleCatalog::load_from_file(Path::new("my_rules.json")).unwrap();
//! ```

pub mod rules;
pub mod store;
