//! Application error taxonomy and its HTTP mapping.
//!
//! [`AppError`] is a closed enumeration. [`AppError::classify`] is the single place
//! where a failure is turned into a status code, a public message and an optional
//! detail string; [`IntoResponse`] renders that classification as an error envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::error::ErrorKind;
use thiserror::Error;
use validator::ValidationErrors;

use crate::response::{ErrorDiagnostics, ErrorEnvelope};

/// PostgreSQL SQLSTATE for a reference to a column that does not exist.
const UNDEFINED_COLUMN: &str = "42703";

/// Kind of failure reported by the database for a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFault {
    UniqueViolation,
    ForeignKeyViolation,
    UndefinedColumn,
    Other,
}

impl StorageFault {
    /// Derives the fault from the driver's error kind and SQLSTATE code.
    pub fn from_driver(kind: ErrorKind, code: Option<&str>) -> Self {
        match kind {
            ErrorKind::UniqueViolation => Self::UniqueViolation,
            ErrorKind::ForeignKeyViolation => Self::ForeignKeyViolation,
            _ if code == Some(UNDEFINED_COLUMN) => Self::UndefinedColumn,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {message}")]
    Validation { message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("database error ({fault:?}): {message}")]
    Storage {
        fault: StorageFault,
        message: String,
        constraint: Option<String>,
    },

    #[error("internal error: {message}")]
    Internal { message: String },
}

/// Outcome of classifying an [`AppError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status: StatusCode,
    pub message: &'static str,
    pub details: Option<String>,
}

impl Classification {
    fn new(status: StatusCode, message: &'static str, details: Option<String>) -> Self {
        Self {
            status,
            message,
            details,
        }
    }
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn storage(
        fault: StorageFault,
        message: impl Into<String>,
        constraint: Option<String>,
    ) -> Self {
        Self::Storage {
            fault,
            message: message.into(),
            constraint,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Maps the error onto exactly one `(status, message, details)` bucket.
    ///
    /// | Variant                      | Status | Message                             |
    /// |------------------------------|--------|-------------------------------------|
    /// | `Storage(UniqueViolation)`   | 409    | `Duplicate entry.`                  |
    /// | `Storage(ForeignKeyViolation)` | 409  | `Foreign key constraint violation.` |
    /// | `Storage(UndefinedColumn)`   | 400    | `Invalid field in query.`           |
    /// | `Storage(Other)`             | 400    | `Database operation failed.`        |
    /// | `Validation`                 | 400    | `Validation Error.`                 |
    /// | `NotFound`                   | 404    | `Resource not found.`               |
    /// | `Internal`                   | 500    | `Internal Server Error.`            |
    ///
    /// Internal errors never carry details; their message is only logged.
    pub fn classify(&self) -> Classification {
        match self {
            AppError::Storage {
                fault: StorageFault::UniqueViolation,
                constraint,
                ..
            } => Classification::new(
                StatusCode::CONFLICT,
                "Duplicate entry.",
                Some(match constraint {
                    Some(name) => format!(
                        "A record with this information already exists (constraint: {name})."
                    ),
                    None => "A record with this information already exists.".to_string(),
                }),
            ),
            AppError::Storage {
                fault: StorageFault::ForeignKeyViolation,
                ..
            } => Classification::new(
                StatusCode::CONFLICT,
                "Foreign key constraint violation.",
                Some("This operation violates a foreign key constraint.".to_string()),
            ),
            AppError::Storage {
                fault: StorageFault::UndefinedColumn,
                message,
                ..
            } => Classification::new(
                StatusCode::BAD_REQUEST,
                "Invalid field in query.",
                Some(message.clone()),
            ),
            AppError::Storage {
                fault: StorageFault::Other,
                message,
                ..
            } => Classification::new(
                StatusCode::BAD_REQUEST,
                "Database operation failed.",
                Some(message.clone()),
            ),
            AppError::Validation { message } => Classification::new(
                StatusCode::BAD_REQUEST,
                "Validation Error.",
                Some(message.clone()),
            ),
            AppError::NotFound { message } => Classification::new(
                StatusCode::NOT_FOUND,
                "Resource not found.",
                Some(message.clone()),
            ),
            AppError::Internal { .. } => Classification::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error.",
                None,
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Classification {
            status,
            message,
            details,
        } = self.classify();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let envelope = ErrorEnvelope::new(message, status, details);
        let diagnostics = ErrorDiagnostics::new(envelope.clone(), format!("{self:?}"));

        let mut response = (status, Json(envelope)).into_response();
        response.extensions_mut().insert(diagnostics);
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
            sqlx::Error::Database(db) => {
                let fault = StorageFault::from_driver(db.kind(), db.code().as_deref());
                AppError::storage(fault, db.message(), db.constraint().map(str::to_owned))
            }
            other => AppError::internal(other.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .values()
            .flat_map(|field| field.iter())
            .map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => e.code.to_string(),
            })
            .collect();
        messages.sort();
        messages.dedup();

        AppError::bad_request(messages.join("; "))
    }
}
