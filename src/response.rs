//! Uniform JSON envelopes wrapping every response body.
//!
//! Success: `{"success": true, "message"?: ..., "count"?: n, "data": ...}`
//!
//! Failure: `{"success": false, "error": {"message", "statusCode", "details"?, "stack"?}}`

use axum::http::StatusCode;
use serde::Serialize;

/// Success envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: Serialize> Envelope<Vec<T>> {
    /// Wraps a collection and records its length in `count`.
    pub fn list(data: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            count: Some(data.len()),
            data,
        }
    }
}

/// Failure envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub message: String,

    #[serde(rename = "statusCode")]
    pub status_code: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>, status: StatusCode, details: Option<String>) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                message: message.into(),
                status_code: status.as_u16(),
                details,
                stack: None,
            },
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.error.stack = Some(stack.into());
        self
    }
}

/// Internal error rendering attached to failed responses as an extension.
///
/// Only [`crate::api::middleware::diagnostics`] reads it, and only in modes that
/// expose diagnostics.
#[derive(Debug, Clone)]
pub struct ErrorDiagnostics {
    pub envelope: ErrorEnvelope,
    pub trace: String,
}

impl ErrorDiagnostics {
    pub fn new(envelope: ErrorEnvelope, trace: String) -> Self {
        Self { envelope, trace }
    }

    /// The public envelope with the internal trace filled into `error.stack`.
    pub fn into_detailed_envelope(self) -> ErrorEnvelope {
        self.envelope.with_stack(self.trace)
    }
}
