//! Shared application state injected into all handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::EnrollmentService;
use crate::infrastructure::persistence::{SqliteActivityRepository, SqliteEnrollmentRepository};

/// The enrollment service wired to its SQLite repositories.
pub type SqliteEnrollmentService =
    EnrollmentService<SqliteActivityRepository, SqliteEnrollmentRepository>;

/// Application state shared across handlers.
///
/// Built once at startup; the storage handle is injected here rather
/// than living in process-wide state.
#[derive(Clone)]
pub struct AppState {
    pub enrollment_service: Arc<SqliteEnrollmentService>,
    /// Kept alongside the service for lightweight liveness checks.
    pub db: SqlitePool,
}

impl AppState {
    /// Wires repositories and the enrollment service around a pool.
    pub fn new(pool: SqlitePool) -> Self {
        let shared = Arc::new(pool.clone());
        let activity_repository = Arc::new(SqliteActivityRepository::new(shared.clone()));
        let enrollment_repository = Arc::new(SqliteEnrollmentRepository::new(shared));

        Self {
            enrollment_service: Arc::new(EnrollmentService::new(
                activity_repository,
                enrollment_repository,
            )),
            db: pool,
        }
    }
}
