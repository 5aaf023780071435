//! SQLite implementation of the enrollment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Enrollment, NewEnrollment};
use crate::domain::repositories::{EnrollmentOutcome, EnrollmentRepository};
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    id: i64,
    student_email: String,
    activity_id: i64,
    created_at: DateTime<Utc>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Enrollment::new(row.id, row.student_email, row.activity_id, row.created_at)
    }
}

const SQL_FIND_ENROLLMENT: &str = r#"
SELECT id FROM enrollments
WHERE activity_id = ? AND student_email = ?
"#;

const SQL_COUNT_ROSTER: &str = r#"
SELECT COUNT(*) FROM enrollments
WHERE activity_id = ?
"#;

const SQL_INSERT_STUDENT_IF_MISSING: &str = r#"
INSERT INTO students (email) VALUES (?)
ON CONFLICT (email) DO NOTHING
"#;

const SQL_INSERT_ENROLLMENT: &str = r#"
INSERT INTO enrollments (student_email, activity_id)
VALUES (?, ?)
RETURNING id, student_email, activity_id, created_at
"#;

const SQL_DELETE_ENROLLMENT: &str = r#"
DELETE FROM enrollments
WHERE activity_id = ? AND student_email = ?
"#;

const SQL_ROSTER_EMAILS: &str = r#"
SELECT student_email FROM enrollments
WHERE activity_id = ?
ORDER BY id
"#;

/// SQLite repository for the enrollment lifecycle.
///
/// Signup runs its duplicate check, capacity check, lazy student insert
/// and enrollment insert in one transaction; the unique index on
/// (activity_id, student_email) backstops races between writers.
pub struct SqliteEnrollmentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteEnrollmentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for SqliteEnrollmentRepository {
    async fn enroll(
        &self,
        new_enrollment: NewEnrollment,
        capacity: Option<i64>,
    ) -> Result<EnrollmentOutcome, AppError> {
        let mut tx = self.pool.begin().await?;

        // Early returns roll the transaction back on drop.
        let existing: Option<i64> = sqlx::query_scalar(SQL_FIND_ENROLLMENT)
            .bind(new_enrollment.activity_id)
            .bind(&new_enrollment.student_email)
            .fetch_optional(&mut *tx)
            .await?;

        if existing.is_some() {
            return Ok(EnrollmentOutcome::AlreadyEnrolled);
        }

        if let Some(limit) = capacity {
            let roster_size: i64 = sqlx::query_scalar(SQL_COUNT_ROSTER)
                .bind(new_enrollment.activity_id)
                .fetch_one(&mut *tx)
                .await?;

            if roster_size >= limit {
                return Ok(EnrollmentOutcome::Full { limit });
            }
        }

        sqlx::query(SQL_INSERT_STUDENT_IF_MISSING)
            .bind(&new_enrollment.student_email)
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query_as::<_, EnrollmentRow>(SQL_INSERT_ENROLLMENT)
            .bind(&new_enrollment.student_email)
            .bind(new_enrollment.activity_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(EnrollmentOutcome::Enrolled(row.into()))
    }

    async fn withdraw(&self, activity_id: i64, student_email: &str) -> Result<bool, AppError> {
        let result = sqlx::query(SQL_DELETE_ENROLLMENT)
            .bind(activity_id)
            .bind(student_email)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn emails_for_activity(&self, activity_id: i64) -> Result<Vec<String>, AppError> {
        let emails = sqlx::query_scalar(SQL_ROSTER_EMAILS)
            .bind(activity_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(emails)
    }
}
