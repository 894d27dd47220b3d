//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Liveness check
//! - `/api/*`        - REST API (see [`crate::api::routes`])
//! - anything else   - 404 error envelope, including known paths with an
//!   unsupported method
//!
//! # Middleware
//!
//! - **Diagnostics** - Adds `error.stack` to error envelopes in development mode
//! - **CORS** - Single allowed origin with credentials
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::{health_handler, route_not_found_handler};
use crate::api::middleware::{cors, diagnostics, tracing};
use crate::state::AppState;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origin` - the only origin allowed to make cross-origin requests
///
/// Trailing-slash normalization is applied by the server around this router.
pub fn app_router(state: AppState, cors_origin: HeaderValue) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .method_not_allowed_fallback(route_not_found_handler)
        .fallback(route_not_found_handler)
        .layer(middleware::from_fn_with_state(
            state.runtime_mode,
            diagnostics::layer,
        ))
        .with_state(state)
        .layer(cors::layer(cors_origin))
        .layer(tracing::layer())
}
