#![allow(dead_code)]

use activity_enrollment::state::AppState;
use sqlx::SqlitePool;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool)
}

pub async fn create_test_activity(pool: &SqlitePool, name: &str, max_participants: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO activities (name, description, schedule, max_participants)
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(format!("{name} description"))
    .bind("Mondays, 3:30 PM - 5:00 PM")
    .bind(max_participants)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_enrollment(pool: &SqlitePool, activity_id: i64, email: &str) {
    sqlx::query("INSERT INTO students (email) VALUES (?) ON CONFLICT (email) DO NOTHING")
        .bind(email)
        .execute(pool)
        .await
        .unwrap();

    sqlx::query("INSERT INTO enrollments (student_email, activity_id) VALUES (?, ?)")
        .bind(email)
        .bind(activity_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn roster_size(pool: &SqlitePool, activity_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE activity_id = ?")
        .bind(activity_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn student_exists(pool: &SqlitePool, email: &str) -> bool {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap();
    count > 0
}

pub async fn student_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM students")
        .fetch_one(pool)
        .await
        .unwrap()
}
