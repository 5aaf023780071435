//! Handler for the root redirect.

use axum::response::Redirect;

/// Redirects the root path to the static landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Redirect {
    Redirect::temporary("/static/index.html")
}
