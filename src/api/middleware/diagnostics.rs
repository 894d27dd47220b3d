//! Error diagnostics middleware.
//!
//! [`crate::error::AppError`] renders the public envelope and attaches an
//! [`ErrorDiagnostics`] extension. In modes that expose diagnostics this layer
//! re-renders the body with `error.stack` filled in; otherwise the response
//! passes through untouched.

use axum::{
    Json,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::RuntimeMode;
use crate::response::ErrorDiagnostics;

pub async fn layer(State(mode): State<RuntimeMode>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    if !mode.exposes_diagnostics() {
        return response;
    }

    let Some(diagnostics) = response.extensions().get::<ErrorDiagnostics>().cloned() else {
        return response;
    };

    let (parts, _) = response.into_parts();
    let (_, body) = Json(diagnostics.into_detailed_envelope())
        .into_response()
        .into_parts();

    Response::from_parts(parts, body)
}
