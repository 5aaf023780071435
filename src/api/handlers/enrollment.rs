//! Handlers for the signup and unregister endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::enrollment::{ConfirmationResponse, EmailQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Signs a student up for an activity.
///
/// # Endpoint
///
/// `POST /activities/{name}/signup?email=student@school.edu`
///
/// # Errors
///
/// - **404** - unknown activity name
/// - **400** - the student is already signed up
/// - **409** - the roster is at capacity
pub async fn signup_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<ConfirmationResponse>, AppError> {
    state
        .enrollment_service
        .sign_up(&activity_name, &query.email)
        .await?;

    Ok(Json(ConfirmationResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

/// Removes a student's enrollment in an activity.
///
/// # Endpoint
///
/// `DELETE /activities/{name}/unregister?email=student@school.edu`
///
/// # Errors
///
/// - **404** - unknown activity name
/// - **400** - the student is not signed up for this activity
pub async fn unregister_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<ConfirmationResponse>, AppError> {
    state
        .enrollment_service
        .unregister(&activity_name, &query.email)
        .await?;

    Ok(Json(ConfirmationResponse {
        message: format!("Unregistered {} from {}", query.email, activity_name),
    }))
}
