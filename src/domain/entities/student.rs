//! Student entity keyed by email.

use chrono::{DateTime, Utc};

/// A student identified by email.
///
/// The email is an opaque, case-sensitive identifier; the service never
/// validates it as a well-formed address. Students are created lazily on
/// their first signup and never deleted.
#[derive(Debug, Clone)]
pub struct Student {
    pub email: String,
    pub name: Option<String>,
    pub grade: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Student {
    pub fn new(
        email: String,
        name: Option<String>,
        grade: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            name,
            grade,
            created_at,
        }
    }
}
