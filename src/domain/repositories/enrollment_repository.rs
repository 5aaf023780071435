//! Repository trait for enrollment data access.

use crate::domain::entities::{Enrollment, NewEnrollment};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an enrollment attempt.
///
/// The repository reports what happened inside its transaction; mapping
/// an outcome to the public error taxonomy is the service's job.
#[derive(Debug, Clone)]
pub enum EnrollmentOutcome {
    /// The enrollment row was created (and the student row, if this email
    /// was never seen before).
    Enrolled(Enrollment),
    /// An enrollment for this (activity, student) pair already exists.
    AlreadyEnrolled,
    /// The roster is at the given capacity limit.
    Full { limit: i64 },
}

/// Repository interface for managing enrollments.
///
/// The duplicate check, the capacity check and the insert must be atomic
/// with respect to concurrent callers, so the whole check-then-act
/// sequence lives behind [`EnrollmentRepository::enroll`] rather than
/// being composed from finer-grained calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteEnrollmentRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Enrolls a student in an activity.
    ///
    /// Runs in a single transaction:
    /// 1. Reject if an enrollment for the pair exists.
    /// 2. Reject if `capacity` is `Some(limit)` and the roster is full.
    /// 3. Insert the student row if this email has never been seen.
    /// 4. Insert the enrollment row.
    ///
    /// A `capacity` of `None` skips the roster-size check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AlreadySignedUp`] if a concurrent writer hit
    /// the unique index first, [`AppError::Internal`] on database errors.
    async fn enroll(
        &self,
        new_enrollment: NewEnrollment,
        capacity: Option<i64>,
    ) -> Result<EnrollmentOutcome, AppError>;

    /// Deletes the enrollment for the given pair.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if the pair
    /// had no enrollment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn withdraw(&self, activity_id: i64, student_email: &str) -> Result<bool, AppError>;

    /// Lists the emails enrolled in an activity, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn emails_for_activity(&self, activity_id: i64) -> Result<Vec<String>, AppError>;
}
