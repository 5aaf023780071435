//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! with runtime-bound statements.
//!
//! # Repositories
//!
//! - [`SqliteActivityRepository`] - Activity lookups
//! - [`SqliteEnrollmentRepository`] - Enrollment lifecycle and rosters

pub mod sqlite_activity_repository;
pub mod sqlite_enrollment_repository;

pub use sqlite_activity_repository::SqliteActivityRepository;
pub use sqlite_enrollment_repository::SqliteEnrollmentRepository;
