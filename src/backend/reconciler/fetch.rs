//! HTTP download of edited documents.

use std::time::Duration;

use bytes::Bytes;
use url::Url;

use crate::backend::error::BackendError;

/// Downloads edited documents with a bounded timeout and no retries.
#[derive(Debug, Clone)]
pub struct DocumentFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl DocumentFetcher {
    /// Builds a `reqwest::Client` whose every request is capped by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("docbridge/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::HttpClient(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, timeout })
    }

    /// GETs `url` and returns the full body.
    ///
    /// Network errors, timeouts and non-2xx statuses all map to `FetchFailed`.
    pub async fn fetch(&self, url: &Url) -> Result<Bytes, BackendError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.describe(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::fetch(url.as_str(), format!("HTTP status {status}")));
        }

        response.bytes().await.map_err(|e| self.describe(url, &e))
    }

    fn describe(&self, url: &Url, err: &reqwest::Error) -> BackendError {
        let message = if err.is_timeout() {
            format!("timed out after {:?}", self.timeout)
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };
        BackendError::fetch(url.as_str(), message)
    }
}
