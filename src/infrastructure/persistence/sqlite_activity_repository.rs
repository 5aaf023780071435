//! SQLite implementation of the activity repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::Activity;
use crate::domain::repositories::ActivityRepository;
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct ActivityRow {
    id: i64,
    name: String,
    description: Option<String>,
    schedule: Option<String>,
    max_participants: i64,
    created_at: DateTime<Utc>,
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Activity::new(
            row.id,
            row.name,
            row.description,
            row.schedule,
            row.max_participants,
            row.created_at,
        )
    }
}

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT id, name, description, schedule, max_participants, created_at
FROM activities
ORDER BY id
"#;

const SQL_FIND_ACTIVITY_BY_NAME: &str = r#"
SELECT id, name, description, schedule, max_participants, created_at
FROM activities
WHERE name = ?
"#;

/// SQLite repository for activity lookups.
pub struct SqliteActivityRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteActivityRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for SqliteActivityRepository {
    async fn list(&self) -> Result<Vec<Activity>, AppError> {
        let rows = sqlx::query_as::<_, ActivityRow>(SQL_LIST_ACTIVITIES)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Activity::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, AppError> {
        let row = sqlx::query_as::<_, ActivityRow>(SQL_FIND_ACTIVITY_BY_NAME)
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Activity::from))
    }
}
