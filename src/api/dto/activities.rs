//! DTOs for the activity listing endpoint.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::application::services::ActivityRoster;

/// The listing response: activity name → details.
///
/// A sorted map keeps the response order deterministic.
pub type ActivitiesResponse = BTreeMap<String, ActivityDetails>;

/// Roster view of a single activity.
#[derive(Debug, Serialize)]
pub struct ActivityDetails {
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub max_participants: i64,
    /// Enrolled student emails, in signup order.
    pub participants: Vec<String>,
}

/// Builds the name-keyed response map from service rosters.
pub fn activities_response(rosters: Vec<ActivityRoster>) -> ActivitiesResponse {
    rosters
        .into_iter()
        .map(|roster| {
            (
                roster.activity.name,
                ActivityDetails {
                    description: roster.activity.description,
                    schedule: roster.activity.schedule,
                    max_participants: roster.activity.max_participants,
                    participants: roster.participants,
                },
            )
        })
        .collect()
}
