//! Mock editor document server
//!
//! The collaborative editor hands out download URLs pointing at `localhost`.
//! These helpers stand up a wiremock server and build such URLs for it.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serves `body` at `route`, expecting exactly `hits` downloads
pub async fn document_server(route: &str, body: &[u8], hits: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .expect(hits)
        .mount(&server)
        .await;
    server
}

/// Answers every request with `status`
pub async fn failing_server(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

/// Download URL as the editor sends it (host `localhost`)
pub fn editor_url(server: &MockServer, route: &str) -> String {
    format!("http://localhost:{}{}", server.address().port(), route)
}
