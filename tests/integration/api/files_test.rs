//! Document Registry API tests
//!
//! GET /files and GET /file/{filename}

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;

use crate::common::TestEnv;
use docbridge::backend::registry::DOCX_CONTENT_TYPE;

#[tokio::test]
async fn test_list_only_docx_files() {
    let env = TestEnv::builder()
        .source_file("a.docx", b"a")
        .source_file("b.txt", b"b")
        .source_file("c.docx", b"c")
        .build()
        .await;

    let response = env.server.get("/files").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let mut files: Vec<String> = response.json();
    files.sort();
    assert_eq!(files, vec!["a.docx", "c.docx"]);
}

#[tokio::test]
async fn test_list_empty_directory() {
    let env = TestEnv::new().await;

    let response = env.server.get("/files").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let files: Vec<String> = response.json();
    assert!(files.is_empty());
}

#[tokio::test]
async fn test_list_missing_directory_is_server_error() {
    let env = TestEnv::builder().without_files_dir().build().await;

    let response = env.server.get("/files").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_fetch_document_bytes_and_headers() {
    let content: &[u8] = b"PK\x03\x04\x14\x00\x06\x00binary\xff\xfe";
    let env = TestEnv::builder().source_file("a.docx", content).build().await;

    let response = env.server.get("/file/a.docx").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.as_bytes().as_ref(), content);

    let headers = response.headers();
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), DOCX_CONTENT_TYPE);
    assert_eq!(
        headers.get(header::CONTENT_DISPOSITION).unwrap(),
        "inline; filename=a.docx"
    );
}

#[tokio::test]
async fn test_fetch_missing_document() {
    let env = TestEnv::builder().source_file("a.docx", b"a").build().await;

    let response = env.server.get("/file/missing.docx").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "File not found");
}

#[tokio::test]
async fn test_fetch_rejects_encoded_traversal() {
    let env = TestEnv::builder().source_file("a.docx", b"a").build().await;
    std::fs::write(env.files_dir.parent().unwrap().join("secret.docx"), b"secret").unwrap();

    let response = env.server.get("/file/..%2Fsecret.docx").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(!response.text().contains("secret"), "body leaked file contents");
}

#[tokio::test]
async fn test_fetch_allows_inner_double_dots() {
    let env = TestEnv::builder().source_file("v1..final.docx", b"v1").build().await;

    let response = env.server.get("/file/v1..final.docx").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.as_bytes().as_ref(), b"v1");
}

#[tokio::test]
async fn test_fetch_does_not_read_saved_documents() {
    let env = TestEnv::builder().source_file("a.docx", b"a").build().await;
    std::fs::write(env.save_dir.join("only-saved.docx"), b"saved").unwrap();

    let response = env.server.get("/file/only-saved.docx").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
