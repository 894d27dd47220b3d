//! API index and unmatched-route handlers.

use axum::Json;

use crate::api::dto::index::{ApiEndpoints, ApiIndexResponse};
use crate::error::AppError;

/// Returns a welcome message and the endpoint map.
///
/// # Endpoint
///
/// `GET /api`
pub async fn api_index_handler() -> Json<ApiIndexResponse> {
    Json(ApiIndexResponse {
        success: true,
        message: "Welcome to the Users API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ApiEndpoints {
            users: "/api/users".to_string(),
            health: "/health".to_string(),
        },
    })
}

/// Fallback for routes that match nothing.
pub async fn route_not_found_handler() -> AppError {
    AppError::not_found("Route not found")
}
