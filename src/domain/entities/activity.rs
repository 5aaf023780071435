//! Activity entity representing an extracurricular offering.

use chrono::{DateTime, Utc};

/// A named extracurricular activity students can join.
///
/// The `name` is the client-facing key; the surrogate `id` is assigned by
/// storage and never exposed over HTTP.
#[derive(Debug, Clone)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub max_participants: i64,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// Creates a new Activity instance.
    pub fn new(
        id: i64,
        name: String,
        description: Option<String>,
        schedule: Option<String>,
        max_participants: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            schedule,
            max_participants,
            created_at,
        }
    }

    /// Returns the configured capacity, or `None` when the activity has
    /// no limit.
    ///
    /// A stored `max_participants` of `0` means "no capacity configured",
    /// not "always full".
    pub fn capacity(&self) -> Option<i64> {
        (self.max_participants > 0).then_some(self.max_participants)
    }

    /// Returns true if a roster of `roster_size` students can admit one more.
    pub fn has_room(&self, roster_size: i64) -> bool {
        match self.capacity() {
            Some(limit) => roster_size < limit,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max_participants: i64) -> Activity {
        Activity::new(
            1,
            "Chess Club".to_string(),
            Some("Learn strategies and compete in chess tournaments".to_string()),
            Some("Fridays, 3:30 PM - 5:00 PM".to_string()),
            max_participants,
            Utc::now(),
        )
    }

    #[test]
    fn test_capacity_configured() {
        let a = activity(12);
        assert_eq!(a.capacity(), Some(12));
        assert!(a.has_room(0));
        assert!(a.has_room(11));
        assert!(!a.has_room(12));
        assert!(!a.has_room(13));
    }

    #[test]
    fn test_zero_capacity_means_unlimited() {
        let a = activity(0);
        assert_eq!(a.capacity(), None);
        assert!(a.has_room(0));
        assert!(a.has_room(10_000));
    }
}
