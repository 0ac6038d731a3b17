//! HTTP surface of the ratio proxy, built on axum.
//!
//! [`app`] assembles the routes with request tracing and CORS. The handlers only see
//! the [`FinancialOperations`] trait, so tests can serve fixtures instead of calling
//! DART.

pub mod error;
pub mod routes;

use axum::{
    Router,
    http::{HeaderValue, Method},
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::traits::FinancialOperations;

pub use error::{ApiError, ApiResult, ErrorBody};
pub use routes::{
    CompanySummary, CompareResponse, IndexResponse, RatiosResponse, api_router,
};

/// Shared, immutable state handed to every handler.
pub struct AppState {
    pub source: Arc<dyn FinancialOperations>,
}

impl AppState {
    pub fn new(source: Arc<dyn FinancialOperations>) -> Self {
        Self { source }
    }
}

/// Builds the CORS layer.
///
/// With no configured origins any origin is allowed; otherwise only the listed ones.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    let allow_origin = if origins.is_empty() {
        info!("CORS_ORIGINS not set, allowing any origin");
        AllowOrigin::any()
    } else if parsed.is_empty() {
        warn!("CORS_ORIGINS is set but contains no valid origins, allowing any");
        AllowOrigin::any()
    } else {
        info!("CORS configured with {} allowed origins", parsed.len());
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

/// Builds the full application: routes, request tracing and CORS.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    api_router()
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
}
