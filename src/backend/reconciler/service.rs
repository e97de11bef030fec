/**
 * Save Reconciler
 *
 * Turns one save callback into at most one file write:
 *
 * 1. Decide whether the callback carries a finished document
 *    (status 2 or 4 with a non-empty URL); otherwise do nothing.
 * 2. Swap a `localhost` host in the download URL for the internal alias.
 * 3. Derive the persisted filename from the document key.
 * 4. Download the full body, then write it over any previous version.
 *
 * The body is downloaded completely before the target file is opened, so a
 * failed download never truncates an existing document. The write itself is
 * not atomic. Concurrent callbacks for the same key race and the last write
 * wins.
 */

use std::path::PathBuf;

use crate::backend::error::BackendError;
use crate::backend::reconciler::download_url::rewrite_localhost;
use crate::backend::reconciler::fetch::DocumentFetcher;
use crate::shared::{persisted_filename, AppConfig, CallbackPayload};

/// Result of a handled callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The callback did not carry a document to store
    Skipped,
    /// The document was written
    Saved {
        /// Final location inside the persisted-documents directory
        path: PathBuf,
        /// Number of bytes written
        bytes: usize,
    },
}

/// Persists edited documents announced by save callbacks
#[derive(Debug, Clone)]
pub struct SaveReconciler {
    save_dir: PathBuf,
    internal_host_alias: String,
    default_filename: String,
    fetcher: DocumentFetcher,
}

impl SaveReconciler {
    pub fn new(config: &AppConfig) -> Result<Self, BackendError> {
        Ok(Self {
            save_dir: config.save_dir.clone(),
            internal_host_alias: config.internal_host_alias.clone(),
            default_filename: config.default_filename.clone(),
            fetcher: DocumentFetcher::new(config.fetch_timeout())?,
        })
    }

    /// Path a callback with this key would be written to
    pub fn target_path(&self, key: Option<&str>) -> PathBuf {
        self.save_dir
            .join(persisted_filename(key, &self.default_filename))
    }

    /// Handles one callback.
    ///
    /// Non-saving callbacks return `Skipped` without touching the network or
    /// the filesystem. Failures are returned as-is and never retried.
    pub async fn handle_callback(
        &self,
        payload: &CallbackPayload,
    ) -> Result<SaveOutcome, BackendError> {
        let Some(raw_url) = payload.save_url() else {
            tracing::debug!(status = payload.status, "Callback does not require saving");
            return Ok(SaveOutcome::Skipped);
        };

        let download_url = rewrite_localhost(raw_url, &self.internal_host_alias)?;
        let path = self.target_path(payload.key.as_deref());

        tracing::info!(url = %download_url, "Downloading edited file");
        let content = self.fetcher.fetch(&download_url).await?;

        tokio::fs::write(&path, &content)
            .await
            .map_err(|e| BackendError::storage(&path, &e))?;

        tracing::info!(path = %path.display(), bytes = content.len(), "Edited file saved successfully");

        Ok(SaveOutcome::Saved {
            path,
            bytes: content.len(),
        })
    }
}
