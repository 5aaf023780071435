use activity_enrollment::api::handlers::root_handler;
use axum::{Router, routing::get};
use axum_test::TestServer;

#[tokio::test]
async fn test_root_redirects_to_static_index() {
    let app = Router::new().route("/", get(root_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status(axum::http::StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header("location"),
        "/static/index.html"
    );
}
