//! Extractors that reject with [`AppError`] instead of axum's plain-text bodies.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor; malformed bodies become validation errors.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::bad_request(rejection.body_text())),
        }
    }
}

impl<T> ApiJson<T>
where
    T: DeserializeOwned,
{
    /// Deserializes an already-buffered body with the same rejection mapping as
    /// the extractor.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AppError> {
        Json::<T>::from_bytes(bytes)
            .map(|Json(value)| Self(value))
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))
    }
}

/// `{id}` path segment parsed as a user id.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| AppError::bad_request(format!("Invalid user id: '{raw}'")))
    }
}
