use crate::ClientError;

#[test]
fn test_from_response_prefers_detail() {
    let err = ClientError::from_response(400, br#"{"detail": "Project key already exists"}"#);

    assert_eq!(err.status(), Some(400));
    assert_eq!(
        err.user_message("Failed to create project"),
        "Project key already exists"
    );
}

#[test]
fn test_from_response_reads_error_envelope() {
    let body = br#"{"error": {"code": "VALIDATION_ERROR", "message": "title: field required", "details": []}}"#;
    let err = ClientError::from_response(422, body);

    match &err {
        ClientError::Api { code, message, .. } => {
            assert_eq!(code.as_deref(), Some("VALIDATION_ERROR"));
            assert_eq!(message.as_deref(), Some("title: field required"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn test_from_response_without_json_uses_fallback() {
    let err = ClientError::from_response(502, b"<html>Bad Gateway</html>");

    assert_eq!(err.user_message("Failed to add comment"), "Failed to add comment");
    assert!(err.to_string().contains("request failed"));
}

#[test]
fn test_status_predicates() {
    let unauthorized = ClientError::from_response(401, br#"{"detail": "Not authenticated"}"#);
    let not_found = ClientError::from_response(404, br#"{"detail": "Issue not found"}"#);

    assert!(unauthorized.is_unauthorized());
    assert!(!unauthorized.is_not_found());
    assert!(not_found.is_not_found());
    assert!(!not_found.is_unauthorized());
}

#[test]
fn test_rejected_message_is_user_message() {
    let err = ClientError::rejected("Not logged in");

    assert_eq!(err.user_message("ignored"), "Not logged in");
    assert_eq!(err.status(), None);
}

#[test]
fn test_display_message_omits_location() {
    let without_detail = ClientError::from_response(502, b"<html>Bad Gateway</html>");
    let with_detail = ClientError::from_response(403, br#"{"detail": "Not a project member"}"#);
    let json = ClientError::from(serde_json::from_str::<i64>("nope").unwrap_err());
    let session = ClientError::from(ih_config::ConfigError::session("token file is corrupt"));

    assert!(without_detail.to_string().contains(".rs:"));
    assert_eq!(
        without_detail.display_message(),
        "API error (502): request failed"
    );
    assert_eq!(with_detail.display_message(), "Not a project member");
    assert!(json.display_message().starts_with("JSON parse error: "));
    assert_eq!(
        session.display_message(),
        "Session storage error: Session error: token file is corrupt"
    );

    for err in [&without_detail, &with_detail, &json, &session] {
        assert!(
            !err.display_message().contains(".rs:"),
            "location leaked: {}",
            err.display_message()
        );
    }
}
