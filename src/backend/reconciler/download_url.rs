//! Host rewriting for callback download URLs.
//!
//! The editor builds download URLs from its own point of view, usually with
//! `localhost` as the host. This server runs in a different network namespace,
//! so that host is swapped for a configured alias before fetching.

use url::Url;

use crate::backend::error::BackendError;

const LOCALHOST: &str = "localhost";

/// Parses `raw` and replaces a `localhost` host with `alias`.
///
/// Only the host changes; scheme, port, path, query and fragment are kept.
/// Hosts other than `localhost` (including `127.0.0.1`) pass through.
pub fn rewrite_localhost(raw: &str, alias: &str) -> Result<Url, BackendError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| BackendError::fetch(raw, format!("invalid download URL: {e}")))?;

    if url.host_str() == Some(LOCALHOST) {
        url.set_host(Some(alias))
            .map_err(|e| BackendError::fetch(raw, format!("cannot apply host alias '{alias}': {e}")))?;
    }

    Ok(url)
}
