//! Business logic services for the application layer.

pub mod enrollment_service;

pub use enrollment_service::{ActivityRoster, EnrollmentService};
