//! Property-based tests for filename derivation
//!
//! Uses proptest to generate arbitrary document keys and verify that the
//! persisted filename is always a safe, non-empty single path component.

use proptest::prelude::*;
use docbridge::shared::{
    persisted_filename, sanitize_filename, validate_source_name, MAX_FILENAME_BYTES,
};

fn allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

proptest! {
    #[test]
    fn test_persisted_name_uses_allowed_charset(key in ".{0,600}") {
        let name = persisted_filename(Some(&key), "edited.docx");
        prop_assert!(!name.is_empty());
        prop_assert!(name.chars().all(allowed), "unexpected character in {:?}", name);
        prop_assert!(name.len() <= MAX_FILENAME_BYTES);
    }

    #[test]
    fn test_persisted_name_is_single_component(key in ".*", fallback in ".*") {
        let name = persisted_filename(Some(&key), &fallback);
        prop_assert!(!name.contains('/'));
        prop_assert!(!name.contains('\\'));
        prop_assert!(name != "." && name != "..");

        let joined = std::path::Path::new("saved").join(&name);
        prop_assert_eq!(joined.parent(), Some(std::path::Path::new("saved")));
    }

    #[test]
    fn test_clean_keys_are_kept_verbatim(key in "[A-Za-z0-9_-][A-Za-z0-9._-]{0,40}") {
        prop_assert_eq!(sanitize_filename(&key), Some(key.clone()));
    }

    #[test]
    fn test_sanitize_is_idempotent(key in ".*") {
        if let Some(once) = sanitize_filename(&key) {
            prop_assert_eq!(sanitize_filename(&once), Some(once.clone()));
        }
    }

    #[test]
    fn test_source_names_with_separators_rejected(
        prefix in "[a-z]{0,8}",
        separator in prop::sample::select(vec!["/", "\\", "../", "..\\"]),
        suffix in "[a-z]{1,8}\\.docx",
    ) {
        let name = format!("{prefix}{separator}{suffix}");
        prop_assert!(validate_source_name(&name).is_err());
    }
}
