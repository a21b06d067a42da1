//! JSON HTTP API for the recommendation engine.
//!
//! Built on Axum with the same hardening layers on every route: security
//! headers, per-IP rate limiting, request timeout, concurrency limit and a
//! body-size limit.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! craft-advisor serve
//!
//! # Custom port with a custom rule catalog
//! craft-advisor --catalog my_rules.json serve --port 3000
//!
//! # Bind to all interfaces
//! craft-advisor serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `POST /api/ai-chat/concept-merge` - Merge `{concept1, concept2}` into a project idea
//! - `POST /api/ai-chat/optimize-cost` - Cheaper alternatives for `{components}`
//! - `POST /api/ai-chat/suggest-projects` - Projects for `{equipment, skill_level, budget}`
//! - `POST /api/ai-chat/message` - Assistant reply to `{message}`
//! - `GET /api/catalog` - Summary of the loaded rule catalog
//! - `GET /health` - Liveness check

pub mod request;
pub mod server;
