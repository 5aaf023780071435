//! Enrollment entity joining a student to an activity.

use chrono::{DateTime, Utc};

/// One student's membership in one activity.
///
/// At most one enrollment exists per (`activity_id`, `student_email`)
/// pair at any time. Rows are created by signup and deleted by
/// unregister, never updated in place.
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub id: i64,
    pub student_email: String,
    pub activity_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn new(id: i64, student_email: String, activity_id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            student_email,
            activity_id,
            created_at,
        }
    }
}

/// Input data for creating a new enrollment.
#[derive(Debug, Clone)]
pub struct NewEnrollment {
    pub student_email: String,
    pub activity_id: i64,
}
