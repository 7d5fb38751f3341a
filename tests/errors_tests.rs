use reddigest::errors::DigestError;

/// The error display strings name the failing stage; the top-level
/// runner logs them verbatim, so keep them stable.

#[test]
fn test_error_display_strings() {
    let cases = [
        (
            DigestError::ConfigError("bad toml".to_string()),
            "Failed to load configuration: bad toml",
        ),
        (
            DigestError::HttpError("timeout".to_string()),
            "Failed to send HTTP request: timeout",
        ),
        (
            DigestError::RedditError("no children".to_string()),
            "Failed to parse Reddit response: no children",
        ),
        (
            DigestError::LlmError("No text in response".to_string()),
            "Failed to access completion API: No text in response",
        ),
        (
            DigestError::WebhookError("429".to_string()),
            "Failed to deliver webhook message: 429",
        ),
        (
            DigestError::StorageError("disk full".to_string()),
            "Failed to write snapshot: disk full",
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(error.to_string(), expected);
    }
}

#[test]
fn test_io_error_maps_to_storage() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: DigestError = io.into();
    assert!(matches!(err, DigestError::StorageError(_)));
}
