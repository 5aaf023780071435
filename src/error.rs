//! Application error taxonomy and its HTTP representation.
//!
//! Every error is serialized as a JSON envelope:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "...", "details": {} } }
//! ```
//!
//! All variants except [`AppError::Internal`] are client-input errors and
//! are surfaced directly to the caller; storage failures collapse into
//! `Internal` without internal details leaking into the response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    /// Unknown activity name.
    NotFound { message: String, details: Value },
    /// Duplicate signup for the same (activity, student) pair.
    ///
    /// Surfaced as 400 Bad Request, matching the public contract of this
    /// service rather than the more common 409.
    AlreadySignedUp { message: String, details: Value },
    /// Roster is at the configured `max_participants`.
    CapacityExceeded { message: String, details: Value },
    /// Unregister for a pair that has no enrollment.
    NotEnrolled { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn already_signed_up(message: impl Into<String>, details: Value) -> Self {
        Self::AlreadySignedUp {
            message: message.into(),
            details,
        }
    }
    pub fn capacity_exceeded(message: impl Into<String>, details: Value) -> Self {
        Self::CapacityExceeded {
            message: message.into(),
            details,
        }
    }
    pub fn not_enrolled(message: impl Into<String>, details: Value) -> Self {
        Self::NotEnrolled {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn parts(self) -> (StatusCode, &'static str, String, Value) {
        match self {
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::AlreadySignedUp { message, details } => (
                StatusCode::BAD_REQUEST,
                "already_signed_up",
                message,
                details,
            ),
            AppError::CapacityExceeded { message, details } => {
                (StatusCode::CONFLICT, "capacity_exceeded", message, details)
            }
            AppError::NotEnrolled { message, details } => {
                (StatusCode::BAD_REQUEST, "not_enrolled", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            AppError::NotFound { message, .. }
            | AppError::AlreadySignedUp { message, .. }
            | AppError::CapacityExceeded { message, .. }
            | AppError::NotEnrolled { message, .. }
            | AppError::Internal { message, .. } => message,
        };
        f.write_str(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            // The (activity_id, student_email) unique index is the backstop
            // for races the in-transaction duplicate check cannot see.
            return AppError::already_signed_up("Student is already signed up", json!({}));
        }

        tracing::error!(error = %e, "database error");
        AppError::internal("Database error", json!({}))
    }
}
