//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in `crate::infrastructure::persistence`, and
//! mock implementations are auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`ActivityRepository`] - Activity lookups
//! - [`EnrollmentRepository`] - Enrollment lifecycle and rosters
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod activity_repository;
pub mod enrollment_repository;

pub use activity_repository::ActivityRepository;
pub use enrollment_repository::{EnrollmentOutcome, EnrollmentRepository};

#[cfg(test)]
pub use activity_repository::MockActivityRepository;
#[cfg(test)]
pub use enrollment_repository::MockEnrollmentRepository;
