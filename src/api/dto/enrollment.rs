//! DTOs for the signup and unregister endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters carrying the student email.
///
/// The email is an opaque identifier; no format validation is applied.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Human-readable confirmation returned by signup and unregister.
#[derive(Debug, Serialize)]
pub struct ConfirmationResponse {
    pub message: String,
}
