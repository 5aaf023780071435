//! Startup seeding of the default activity catalog.
//!
//! There is no endpoint for creating activities; the catalog is loaded
//! once at bootstrap, and only when the table is empty, so restarts and
//! redeploys never duplicate or overwrite rows.

use anyhow::Result;
use sqlx::SqlitePool;

/// The default catalog: (name, description, schedule, max_participants).
const DEFAULT_ACTIVITIES: &[(&str, &str, &str, i64)] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
    ),
    (
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
    ),
    (
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
    ),
    (
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
    ),
    (
        "Math Club",
        "Solve challenging problems and participate in math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
    ),
];

const SQL_COUNT_ACTIVITIES: &str = "SELECT COUNT(*) FROM activities";

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (name, description, schedule, max_participants)
VALUES (?, ?, ?, ?)
"#;

/// Inserts the default activities iff the table is empty.
///
/// Returns the number of rows inserted (0 when the catalog was already
/// present).
pub async fn seed_default_activities(pool: &SqlitePool) -> Result<u64> {
    let count: i64 = sqlx::query_scalar(SQL_COUNT_ACTIVITIES)
        .fetch_one(pool)
        .await?;

    if count > 0 {
        tracing::debug!(existing = count, "activity catalog already seeded");
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    for (name, description, schedule, max_participants) in DEFAULT_ACTIVITIES {
        sqlx::query(SQL_INSERT_ACTIVITY)
            .bind(name)
            .bind(description)
            .bind(schedule)
            .bind(max_participants)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    let inserted = DEFAULT_ACTIVITIES.len() as u64;
    tracing::info!(inserted, "seeded default activity catalog");
    Ok(inserted)
}
