//! Activity listing, signup and unregistration service.

use std::sync::Arc;

use crate::domain::entities::{Activity, Enrollment, NewEnrollment};
use crate::domain::repositories::{ActivityRepository, EnrollmentOutcome, EnrollmentRepository};
use crate::error::AppError;
use serde_json::json;

/// An activity together with its current roster.
#[derive(Debug, Clone)]
pub struct ActivityRoster {
    pub activity: Activity,
    /// Enrolled student emails, in signup order.
    pub participants: Vec<String>,
}

/// Service enforcing the enrollment business rules.
///
/// Owns the precondition ordering (activity exists, not a duplicate,
/// roster has room) and the capacity policy; the repositories own the
/// storage-level atomicity of each operation.
pub struct EnrollmentService<A: ActivityRepository, E: EnrollmentRepository> {
    activity_repository: Arc<A>,
    enrollment_repository: Arc<E>,
}

impl<A: ActivityRepository, E: EnrollmentRepository> EnrollmentService<A, E> {
    /// Creates a new enrollment service.
    pub fn new(activity_repository: Arc<A>, enrollment_repository: Arc<E>) -> Self {
        Self {
            activity_repository,
            enrollment_repository,
        }
    }

    /// Returns every activity annotated with its roster.
    ///
    /// Rosters reflect committed enrollments only; an empty list is a
    /// valid result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_activities(&self) -> Result<Vec<ActivityRoster>, AppError> {
        let activities = self.activity_repository.list().await?;

        let mut rosters = Vec::with_capacity(activities.len());
        for activity in activities {
            let participants = self
                .enrollment_repository
                .emails_for_activity(activity.id)
                .await?;
            rosters.push(ActivityRoster {
                activity,
                participants,
            });
        }

        Ok(rosters)
    }

    /// Signs a student up for an activity.
    ///
    /// Preconditions, each short-circuiting:
    /// 1. The activity exists.
    /// 2. No enrollment exists for this (activity, email) pair.
    /// 3. The roster has room, when a capacity is configured.
    ///
    /// The student row is created lazily, in the same transaction as the
    /// enrollment row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`], [`AppError::AlreadySignedUp`] or
    /// [`AppError::CapacityExceeded`] per the precondition that failed,
    /// [`AppError::Internal`] on database errors.
    pub async fn sign_up(&self, activity_name: &str, email: &str) -> Result<Enrollment, AppError> {
        let activity = self.find_activity(activity_name).await?;

        let new_enrollment = NewEnrollment {
            student_email: email.to_string(),
            activity_id: activity.id,
        };

        match self
            .enrollment_repository
            .enroll(new_enrollment, activity.capacity())
            .await?
        {
            EnrollmentOutcome::Enrolled(enrollment) => {
                tracing::info!(activity = %activity.name, %email, "student signed up");
                Ok(enrollment)
            }
            EnrollmentOutcome::AlreadyEnrolled => Err(AppError::already_signed_up(
                "Student is already signed up",
                json!({ "activity": activity.name, "email": email }),
            )),
            EnrollmentOutcome::Full { limit } => Err(AppError::capacity_exceeded(
                "Activity is full",
                json!({ "activity": activity.name, "max_participants": limit }),
            )),
        }
    }

    /// Removes a student's enrollment in an activity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown activity,
    /// [`AppError::NotEnrolled`] if the pair has no enrollment,
    /// [`AppError::Internal`] on database errors.
    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), AppError> {
        let activity = self.find_activity(activity_name).await?;

        let removed = self
            .enrollment_repository
            .withdraw(activity.id, email)
            .await?;

        if !removed {
            return Err(AppError::not_enrolled(
                "Student is not signed up for this activity",
                json!({ "activity": activity.name, "email": email }),
            ));
        }

        tracing::info!(activity = %activity.name, %email, "student unregistered");
        Ok(())
    }

    async fn find_activity(&self, name: &str) -> Result<Activity, AppError> {
        self.activity_repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Activity not found", json!({ "activity": name }))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockActivityRepository, MockEnrollmentRepository};
    use chrono::Utc;

    fn chess_club(max_participants: i64) -> Activity {
        Activity::new(
            1,
            "Chess Club".to_string(),
            Some("Learn strategies and compete in chess tournaments".to_string()),
            Some("Fridays, 3:30 PM - 5:00 PM".to_string()),
            max_participants,
            Utc::now(),
        )
    }

    fn enrollment(id: i64, email: &str, activity_id: i64) -> Enrollment {
        Enrollment::new(id, email.to_string(), activity_id, Utc::now())
    }

    fn service(
        activities: MockActivityRepository,
        enrollments: MockEnrollmentRepository,
    ) -> EnrollmentService<MockActivityRepository, MockEnrollmentRepository> {
        EnrollmentService::new(Arc::new(activities), Arc::new(enrollments))
    }

    #[tokio::test]
    async fn test_list_activities_with_rosters() {
        let mut activities = MockActivityRepository::new();
        let mut enrollments = MockEnrollmentRepository::new();

        activities
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![chess_club(12)]));

        enrollments
            .expect_emails_for_activity()
            .withf(|activity_id| *activity_id == 1)
            .times(1)
            .returning(|_| Ok(vec!["a@x.edu".to_string(), "b@x.edu".to_string()]));

        let rosters = service(activities, enrollments)
            .list_activities()
            .await
            .unwrap();

        assert_eq!(rosters.len(), 1);
        assert_eq!(rosters[0].activity.name, "Chess Club");
        assert_eq!(rosters[0].participants, vec!["a@x.edu", "b@x.edu"]);
    }

    #[tokio::test]
    async fn test_sign_up_success() {
        let mut activities = MockActivityRepository::new();
        let mut enrollments = MockEnrollmentRepository::new();

        activities
            .expect_find_by_name()
            .withf(|name| name == "Chess Club")
            .times(1)
            .returning(|_| Ok(Some(chess_club(12))));

        enrollments
            .expect_enroll()
            .withf(|new, capacity| {
                new.student_email == "a@x.edu" && new.activity_id == 1 && *capacity == Some(12)
            })
            .times(1)
            .returning(|_, _| Ok(EnrollmentOutcome::Enrolled(enrollment(1, "a@x.edu", 1))));

        let result = service(activities, enrollments)
            .sign_up("Chess Club", "a@x.edu")
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().student_email, "a@x.edu");
    }

    #[tokio::test]
    async fn test_sign_up_unknown_activity() {
        let mut activities = MockActivityRepository::new();
        let mut enrollments = MockEnrollmentRepository::new();

        activities
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(None));

        // The enrollment repository must never be touched.
        enrollments.expect_enroll().times(0);

        let result = service(activities, enrollments)
            .sign_up("Knitting Club", "a@x.edu")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_sign_up_duplicate() {
        let mut activities = MockActivityRepository::new();
        let mut enrollments = MockEnrollmentRepository::new();

        activities
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(Some(chess_club(12))));

        enrollments
            .expect_enroll()
            .times(1)
            .returning(|_, _| Ok(EnrollmentOutcome::AlreadyEnrolled));

        let result = service(activities, enrollments)
            .sign_up("Chess Club", "a@x.edu")
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::AlreadySignedUp { .. }
        ));
    }

    #[tokio::test]
    async fn test_sign_up_capacity_exceeded() {
        let mut activities = MockActivityRepository::new();
        let mut enrollments = MockEnrollmentRepository::new();

        activities
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(Some(chess_club(12))));

        enrollments
            .expect_enroll()
            .times(1)
            .returning(|_, _| Ok(EnrollmentOutcome::Full { limit: 12 }));

        let result = service(activities, enrollments)
            .sign_up("Chess Club", "m@x.edu")
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::CapacityExceeded { .. }
        ));
    }

    #[tokio::test]
    async fn test_sign_up_zero_capacity_is_unlimited() {
        let mut activities = MockActivityRepository::new();
        let mut enrollments = MockEnrollmentRepository::new();

        activities
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(Some(chess_club(0))));

        enrollments
            .expect_enroll()
            .withf(|_, capacity| capacity.is_none())
            .times(1)
            .returning(|_, _| Ok(EnrollmentOutcome::Enrolled(enrollment(1, "a@x.edu", 1))));

        let result = service(activities, enrollments)
            .sign_up("Chess Club", "a@x.edu")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unregister_success() {
        let mut activities = MockActivityRepository::new();
        let mut enrollments = MockEnrollmentRepository::new();

        activities
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(Some(chess_club(12))));

        enrollments
            .expect_withdraw()
            .withf(|activity_id, email| *activity_id == 1 && email == "a@x.edu")
            .times(1)
            .returning(|_, _| Ok(true));

        let result = service(activities, enrollments)
            .unregister("Chess Club", "a@x.edu")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unregister_unknown_activity() {
        let mut activities = MockActivityRepository::new();
        let mut enrollments = MockEnrollmentRepository::new();

        activities
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(None));

        enrollments.expect_withdraw().times(0);

        let result = service(activities, enrollments)
            .unregister("Knitting Club", "a@x.edu")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_unregister_not_enrolled() {
        let mut activities = MockActivityRepository::new();
        let mut enrollments = MockEnrollmentRepository::new();

        activities
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(Some(chess_club(12))));

        enrollments
            .expect_withdraw()
            .times(1)
            .returning(|_, _| Ok(false));

        let result = service(activities, enrollments)
            .unregister("Chess Club", "ghost@x.edu")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotEnrolled { .. }));
    }
}
