//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET    /`                              - Redirect to the static landing page
//! - `GET    /health`                        - Health check: database connectivity
//! - `GET    /activities`                    - List activities with rosters
//! - `POST   /activities/{name}/signup`      - Sign a student up
//! - `DELETE /activities/{name}/unregister`  - Remove a student's enrollment
//! - `/static/*`                             - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    activities_handler, health_handler, root_handler, signup_handler, unregister_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{delete, get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/activities", get(activities_handler))
        .route("/activities/{name}/signup", post(signup_handler))
        .route("/activities/{name}/unregister", delete(unregister_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
