//! Repository trait for activity data access.

use crate::domain::entities::Activity;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for reading activities.
///
/// Activities are seeded at bootstrap and immutable afterwards, so the
/// contract is read-only.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteActivityRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Lists every activity, ordered by creation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Activity>, AppError>;

    /// Finds an activity by its unique name.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Activity))` if found
    /// - `Ok(None)` if no activity has that name
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, AppError>;
}
