use sign_lookup::sheets::errors::*;
use std::time::Duration;

#[test]
fn test_status_classification() {
    assert!(matches!(
        LookupError::from_status(400, "", None),
        LookupError::BadRequest(_)
    ));
    assert!(matches!(
        LookupError::from_status(401, "", None),
        LookupError::AccessDenied { status: 401, .. }
    ));
    assert!(matches!(
        LookupError::from_status(403, "", None),
        LookupError::AccessDenied { status: 403, .. }
    ));
    assert!(matches!(
        LookupError::from_status(404, "", None),
        LookupError::SheetNotFound(_)
    ));
    assert_eq!(
        LookupError::from_status(429, "", None),
        LookupError::RateLimited { retry_after: None }
    );
    assert!(matches!(
        LookupError::from_status(502, "", None),
        LookupError::ServiceUnavailable { status: 502, .. }
    ));
    assert!(matches!(
        LookupError::from_status(418, "", None),
        LookupError::UnexpectedStatus { status: 418, .. }
    ));
}

#[test]
fn test_google_error_detail_is_extracted() {
    let body = r#"{"error":{"code":400,"message":"Unable to parse range: Nope","status":"INVALID_ARGUMENT"}}"#;
    assert_eq!(
        LookupError::from_status(400, body, None),
        LookupError::BadRequest("Unable to parse range: Nope (INVALID_ARGUMENT)".to_string())
    );
}

#[test]
fn test_raw_body_detail_is_truncated() {
    let body = "x".repeat(1000);
    let LookupError::BadRequest(detail) = LookupError::from_status(400, &body, None) else {
        panic!("expected BadRequest");
    };
    assert_eq!(detail.chars().count(), 201);
}

#[test]
fn test_error_transient_detection() {
    let transient = LookupError::ServiceUnavailable {
        status: 503,
        detail: String::new(),
    };
    assert!(transient.is_transient());
    assert!(transient.retry_delay().is_some());
    assert!(LookupError::Timeout.is_transient());
    assert!(LookupError::Network("reset".to_string()).is_transient());

    let permanent = LookupError::SheetNotFound("gone".to_string());
    assert!(!permanent.is_transient());
    assert!(permanent.retry_delay().is_none());
}

#[test]
fn test_retry_after_overrides_default_delay() {
    let limited = LookupError::RateLimited {
        retry_after: Some(Duration::from_secs(2)),
    };
    assert_eq!(limited.retry_delay(), Some(Duration::from_secs(2)));

    let config = RetryConfig::default();
    assert_eq!(config.delay_after(0, &limited), Duration::from_secs(2));

    let huge = LookupError::RateLimited {
        retry_after: Some(Duration::from_secs(3600)),
    };
    assert_eq!(config.delay_after(0, &huge), config.max_delay);
}

#[test]
fn test_retry_config_delays() {
    let config = RetryConfig::default();

    // Test exponential backoff
    assert_eq!(config.delay_for_attempt(0), Duration::from_millis(250));
    assert_eq!(config.delay_for_attempt(1), Duration::from_millis(500));
    assert_eq!(config.delay_for_attempt(2), Duration::from_millis(1000));

    // Test max delay cap
    assert_eq!(config.delay_for_attempt(10), config.max_delay);
}

#[test]
fn test_user_messages_are_actionable() {
    assert_eq!(
        LookupError::Timeout.user_message(),
        "Failed to load video. Please check your internet connection."
    );
    assert!(
        LookupError::AccessDenied {
            status: 403,
            detail: String::new()
        }
        .user_message()
        .contains("Anyone with the link can view")
    );
}
