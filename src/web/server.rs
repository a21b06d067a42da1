use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::catalog::store::RuleCatalog;
use crate::cli::ServeArgs;
use crate::core::component::CostReport;
use crate::core::idea::MergeResult;
use crate::core::project::SuggestionReport;
use crate::matching::chat::ChatReply;
use crate::matching::engine::RecommendationEngine;
use crate::matching::error::EngineError;
use crate::web::request::{
    parse_json_body, ChatRequest, MergeRequest, OptimizeRequest, SuggestRequest,
};

/// Security configuration constants to prevent `DoS` attacks
pub const MAX_BODY_SIZE: usize = 64 * 1024; // 64KB
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Shared application state
pub struct AppState {
    pub catalog: RuleCatalog,
}

/// Error body returned by every route
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Create a safe error response, logging the internal cause server-side only
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::InvalidInput(message) => {
                create_safe_error_response(self.error_type(), message, None)
            }
            Self::InternalFault(message) => {
                create_safe_error_response(self.error_type(), &self.to_string(), Some(message))
            }
        };

        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(body)).into_response()
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the tokio runtime cannot
/// be created, or the server fails to start.
pub fn run(args: ServeArgs, catalog_path: Option<&Path>) -> anyhow::Result<()> {
    let catalog = RuleCatalog::load(catalog_path)?;

    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args, catalog).await })
}

/// Create the application router with all routes, hardening layers and
/// per-IP rate limiting.
///
/// # Errors
///
/// Returns an error if the rate limiter configuration is rejected.
pub fn create_router(catalog: RuleCatalog) -> anyhow::Result<Router> {
    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .ok_or_else(|| anyhow::anyhow!("invalid rate limiter configuration"))?;

    Ok(build_router(catalog).layer(GovernorLayer {
        config: Arc::new(governor_conf),
    }))
}

/// Create the application router without rate limiting.
///
/// Rate limiting keys on the peer address, which only exists when serving
/// from a real socket; this router is what [`create_router`] wraps.
pub fn build_router(catalog: RuleCatalog) -> Router {
    let state = Arc::new(AppState { catalog });

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/ai-chat/concept-merge", post(concept_merge_handler))
        .route("/api/ai-chat/optimize-cost", post(optimize_cost_handler))
        .route("/api/ai-chat/suggest-projects", post(suggest_projects_handler))
        .route("/api/ai-chat/message", post(chat_message_handler))
        .route("/api/catalog", get(catalog_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    REQUEST_TIMEOUT,
                ))
                // Limit concurrent requests to prevent DOS
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        )
}

async fn run_server(args: ServeArgs, catalog: RuleCatalog) -> anyhow::Result<()> {
    let rule_count = catalog.len();
    let app = create_router(catalog)?;

    let addr = format!("{}:{}", args.address, args.port);
    tracing::info!("Loaded {} rules", rule_count);
    println!("Starting craft-advisor API server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}/api/catalog"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Merge two concepts into a project idea
async fn concept_merge_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<MergeResult>, EngineError> {
    let request = MergeRequest::from_value(&parse_json_body(&body));
    let engine = RecommendationEngine::new(&state.catalog);
    Ok(Json(engine.merge(&request.concept1, &request.concept2)?))
}

/// Suggest cheaper alternatives for each component
async fn optimize_cost_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CostReport>, EngineError> {
    let request = OptimizeRequest::from_value(&parse_json_body(&body));
    let engine = RecommendationEngine::new(&state.catalog);
    Ok(Json(engine.optimize(&request.components)?))
}

/// Suggest projects for the caller's equipment. Never rejects a request:
/// malformed optional fields take their defaults.
async fn suggest_projects_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Json<SuggestionReport> {
    let request = SuggestRequest::from_value(&parse_json_body(&body));
    let engine = RecommendationEngine::new(&state.catalog);
    Json(engine.suggest(&request.equipment, &request.skill_level, request.budget))
}

async fn chat_message_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ChatReply>, EngineError> {
    let request = ChatRequest::from_value(&parse_json_body(&body));
    let engine = RecommendationEngine::new(&state.catalog);
    Ok(Json(engine.respond(&request.message)?))
}

/// Summary of the loaded rule catalog
async fn catalog_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let catalog = &state.catalog;

    let combinations: Vec<serde_json::Value> = catalog
        .concepts
        .combinations
        .iter()
        .map(|c| {
            serde_json::json!({
                "concepts": c.concepts,
                "title": c.idea.title,
                "difficulty": c.idea.difficulty,
            })
        })
        .collect();

    let pricing: Vec<serde_json::Value> = catalog
        .pricing
        .rules
        .iter()
        .map(|r| {
            serde_json::json!({
                "matcher": r.matcher,
                "alternative": r.alternative,
                "original_price": r.original_price,
                "optimized_price": r.optimized_price,
            })
        })
        .collect();

    let projects: Vec<serde_json::Value> = catalog
        .equipment
        .candidates
        .iter()
        .map(|c| {
            serde_json::json!({
                "matcher": c.matcher,
                "title": c.project.title,
                "estimated_cost": c.project.estimated_cost,
                "difficulty": c.project.difficulty,
            })
        })
        .collect();

    Json(serde_json::json!({
        "count": catalog.len(),
        "concepts": combinations,
        "pricing": pricing,
        "equipment": projects,
        "default_projects": catalog
            .equipment
            .defaults
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>(),
        "chat_topics": catalog
            .chat
            .rules
            .iter()
            .map(|r| r.topic.as_str())
            .collect::<Vec<_>>(),
    }))
}
