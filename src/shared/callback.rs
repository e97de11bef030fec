//! Save Callback Wire Types
//!
//! The collaborative editor POSTs a JSON document to the save endpoint whenever
//! the state of an edit session changes. Only three fields matter here; the
//! editor sends more (`users`, `actions`, `changesurl`, ...) and those are
//! ignored on deserialization.
//!
//! The response is always a small JSON envelope the editor can parse:
//! `{"error":0}` on success, `{"error":1,"message":"..."}` on failure.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::shared::error::SharedError;

/// Status values that carry a finished document ready to be stored.
///
/// `2` means the document is ready to save, `4` that a save was forced.
pub const SAVE_STATUSES: [i64; 2] = [2, 4];

/// Payload of one save callback
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackPayload {
    /// Editor-defined document status; missing is treated as `0`
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: i64,
    /// Transient location of the edited content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Document key, used to derive the persisted filename
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Reads `status` from any JSON value.
///
/// Integral numbers (including `2.0`) keep their value. Strings, fractions,
/// `null` and other shapes become `0`, a status that never saves.
fn lenient_status<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let status = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        _ => None,
    };
    Ok(status.unwrap_or(0))
}

impl CallbackPayload {
    /// Decodes a raw callback body.
    ///
    /// Only JSON objects are accepted. Field shapes inside the object are
    /// read leniently, so a well-formed object never fails on `status`.
    pub fn from_json(body: &[u8]) -> Result<Self, SharedError> {
        let value: Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(SharedError::validation("body", "expected a JSON object"));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Returns the download URL when this callback should be persisted.
    ///
    /// Requires a save status and a non-empty URL; anything else is a no-op.
    pub fn save_url(&self) -> Option<&str> {
        if !SAVE_STATUSES.contains(&self.status) {
            return None;
        }
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Acknowledgement returned to the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckEnvelope {
    /// `0` on success or no-op, `1` on failure
    pub error: u8,
    /// Failure description, omitted on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AckEnvelope {
    /// The fixed success envelope `{"error":0}`
    pub fn ok() -> Self {
        Self {
            error: 0,
            message: None,
        }
    }

    /// A failure envelope `{"error":1,"message":...}`
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: 1,
            message: Some(message.into()),
        }
    }
}
