//! Static asset and middleware tests

use axum::http::{header, HeaderValue, StatusCode};

use crate::common::TestEnv;

#[tokio::test]
async fn test_serves_editor_ui() {
    let env = TestEnv::new().await;

    let response = env.server.get("/editor.html").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "<html>editor</html>");
}

#[tokio::test]
async fn test_serves_plugins() {
    let env = TestEnv::new().await;

    let response = env.server.get("/plugins/hello.js").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "console.log('hello');");
}

#[tokio::test]
async fn test_unknown_asset_is_not_found() {
    let env = TestEnv::new().await;

    let response = env.server.get("/missing.html").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let env = TestEnv::new().await;

    let response = env
        .server
        .get("/files")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://editor.example"))
        .await;

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
