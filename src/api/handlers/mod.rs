//! HTTP request handlers.

pub mod activities;
pub mod enrollment;
pub mod health;
pub mod root;

pub use activities::activities_handler;
pub use enrollment::{signup_handler, unregister_handler};
pub use health::health_handler;
pub use root::root_handler;
