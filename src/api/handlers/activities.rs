//! Handler for the activity listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::activities::{ActivitiesResponse, activities_response};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every activity with its roster and capacity.
///
/// # Endpoint
///
/// `GET /activities`
///
/// # Response
///
/// ```json
/// {
///   "Chess Club": {
///     "description": "Learn strategies and compete in chess tournaments",
///     "schedule": "Fridays, 3:30 PM - 5:00 PM",
///     "max_participants": 12,
///     "participants": ["a@x.edu"]
///   }
/// }
/// ```
pub async fn activities_handler(
    State(state): State<AppState>,
) -> Result<Json<ActivitiesResponse>, AppError> {
    let rosters = state.enrollment_service.list_activities().await?;

    Ok(Json(activities_response(rosters)))
}
