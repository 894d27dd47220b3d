//! API route configuration.

use crate::api::handlers::{
    api_index_handler, create_user_handler, delete_user_handler, get_user_handler,
    list_users_handler, route_not_found_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /`             - Welcome message and endpoint map
/// - `GET    /users`        - List users, newest first
/// - `POST   /users`        - Create a user
/// - `GET    /users/{id}`   - Get a user
/// - `PUT    /users/{id}`   - Partially update a user
/// - `DELETE /users/{id}`   - Delete a user
///
/// Any other method on these paths gets the 404 error envelope.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_index_handler))
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .method_not_allowed_fallback(route_not_found_handler)
}
