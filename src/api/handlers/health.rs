//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "message": "Server is healthy",
///   "timestamp": "2025-01-01T12:00:00Z",
///   "environment": "development"
/// }
/// ```
///
/// Liveness only: the database is not queried.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Server is healthy".to_string(),
        timestamp: Utc::now(),
        environment: state.runtime_mode.to_string(),
    })
}
