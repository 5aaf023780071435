//! Infrastructure layer: storage implementations and bootstrap.
//!
//! - [`persistence`] - SQLite repositories implementing the domain traits
//! - [`seed`] - One-time population of the default activity catalog

pub mod persistence;
pub mod seed;
