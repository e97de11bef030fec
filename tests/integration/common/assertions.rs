//! Custom assertion macros

/// Assert that a response carries the given acknowledgement envelope
#[macro_export]
macro_rules! assert_envelope {
    ($response:expr, $status:expr, $error:expr) => {{
        let response = $response;
        assert_eq!(response.status_code(), $status);
        let envelope: docbridge::shared::AckEnvelope = response.json();
        assert_eq!(envelope.error, $error, "unexpected envelope: {:?}", envelope);
        envelope
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {{
        let haystack = $haystack;
        assert!(
            haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            haystack,
            $needle
        );
    }};
}
