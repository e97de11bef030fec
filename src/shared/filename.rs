//! Filename rules for persisted and source documents.
//!
//! Two separate rules apply:
//!
//! - Persisted documents get a name derived from the editor's document key by
//!   character-class filtering. Anything outside `[A-Za-z0-9._-]` is dropped,
//!   so the result can never contain a path separator.
//! - Source documents are looked up by the name a client asks for. Those names
//!   are not rewritten; unsafe ones are rejected outright.

use crate::shared::error::SharedError;

/// Last-resort name if both the key and the configured fallback filter to nothing.
const BUILTIN_FALLBACK: &str = "edited.docx";

/// Longest filename common filesystems accept, in bytes.
pub const MAX_FILENAME_BYTES: usize = 255;

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-'
}

/// Strips every character outside `[A-Za-z0-9._-]` and truncates the result
/// to [`MAX_FILENAME_BYTES`].
///
/// Returns `None` when nothing usable remains. `.` and `..` count as nothing,
/// since they name directories rather than files.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    // Only ASCII survives the filter, so byte truncation stays on a char boundary.
    let filtered: String = raw
        .chars()
        .filter(|c| is_allowed(*c))
        .take(MAX_FILENAME_BYTES)
        .collect();
    match filtered.as_str() {
        "" | "." | ".." => None,
        _ => Some(filtered),
    }
}

/// Derives the persisted filename for a callback.
///
/// Uses the key when it sanitizes to something non-empty, otherwise the
/// configured fallback (sanitized the same way).
pub fn persisted_filename(key: Option<&str>, fallback: &str) -> String {
    key.and_then(sanitize_filename)
        .or_else(|| sanitize_filename(fallback))
        .unwrap_or_else(|| BUILTIN_FALLBACK.to_string())
}

/// Rejects names that could escape the source directory.
///
/// The name must be a single path component: non-empty, no `/`, `\` or NUL,
/// and neither `.` nor `..`. Dots inside a name (`v1..final.docx`) are fine.
pub fn validate_source_name(name: &str) -> Result<(), SharedError> {
    if name.is_empty() {
        return Err(SharedError::validation("filename", "must not be empty"));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(SharedError::validation(
            "filename",
            "must not contain path separators",
        ));
    }
    if name == "." || name == ".." {
        return Err(SharedError::validation(
            "filename",
            "must not reference a parent or current directory",
        ));
    }
    Ok(())
}
