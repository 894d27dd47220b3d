//! Handlers for user management endpoints.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};

use crate::api::dto::user::{CreateUserRequest, DeletedUser, UpdateUserRequest, UserItem};
use crate::api::extract::{ApiJson, UserId};
use crate::error::AppError;
use crate::response::Envelope;
use crate::state::AppState;

/// Lists all users, newest first.
///
/// # Endpoint
///
/// `GET /api/users`
///
/// # Response
///
/// ```json
/// { "success": true, "count": 2, "data": [ { "id": 2, ... }, { "id": 1, ... } ] }
/// ```
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<UserItem>>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(Envelope::list(
        users.into_iter().map(UserItem::from).collect(),
    )))
}

/// Returns a single user.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 404 if the user does not exist.
pub async fn get_user_handler(
    UserId(id): UserId,
    State(state): State<AppState>,
) -> Result<Json<Envelope<UserItem>>, AppError> {
    let user = state.user_service.get_user(id).await?;

    Ok(Json(Envelope::data(user.into())))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// { "name": "John Doe", "email": "john.doe@example.com" }
/// ```
///
/// # Errors
///
/// Returns 400 if a field is missing or malformed.
/// Returns 409 if the email is already taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<Envelope<UserItem>>), AppError> {
    let user = state.user_service.create_user(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(user.into()).with_message("User created successfully")),
    ))
}

/// Partially updates a user.
///
/// # Endpoint
///
/// `PUT /api/users/{id}`
///
/// All fields are optional; `updated_at` is refreshed even for an empty object.
/// The body is buffered and only parsed after the user is found.
///
/// # Errors
///
/// Returns 404 if the user does not exist, whatever the body holds.
/// Returns 400 if the body is not a JSON object of strings or a field is malformed.
/// Returns 409 if the new email is already taken.
pub async fn update_user_handler(
    UserId(id): UserId,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Envelope<UserItem>>, AppError> {
    let user = state
        .user_service
        .update_user(id, || {
            ApiJson::<UpdateUserRequest>::from_bytes(&body).map(|ApiJson(payload)| payload.into())
        })
        .await?;

    Ok(Json(
        Envelope::data(user.into()).with_message("User updated successfully"),
    ))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn delete_user_handler(
    UserId(id): UserId,
    State(state): State<AppState>,
) -> Result<Json<Envelope<DeletedUser>>, AppError> {
    let id = state.user_service.delete_user(id).await?;

    Ok(Json(
        Envelope::data(DeletedUser { id }).with_message("User deleted successfully"),
    ))
}
