//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls and business rules, and provides a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::enrollment_service::EnrollmentService`] - Activity listing,
//!   signup and unregistration

pub mod services;
