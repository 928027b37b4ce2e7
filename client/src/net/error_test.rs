use super::*;

#[test]
fn from_status_maps_auth_statuses() {
    assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(403, Some("nope".to_owned())), ApiError::Forbidden);
    assert_eq!(ApiError::from_status(404, None), ApiError::NotFound);
}

#[test]
fn from_status_validation_uses_body_message() {
    assert_eq!(
        ApiError::from_status(422, Some("email already taken".to_owned())),
        ApiError::Validation("email already taken".to_owned())
    );
    assert_eq!(ApiError::from_status(400, None), ApiError::Validation("invalid input".to_owned()));
}

#[test]
fn from_status_other_codes_keep_status() {
    assert_eq!(
        ApiError::from_status(503, None),
        ApiError::Status { status: 503, message: String::new() }
    );
}

#[test]
fn user_message_for_bare_status_mentions_code() {
    let err = ApiError::Status { status: 500, message: String::new() };
    assert_eq!(err.user_message(), "Server error (500).");
}

#[test]
fn user_message_for_status_prefers_backend_text() {
    let err = ApiError::Status { status: 409, message: "Task already assigned".to_owned() };
    assert_eq!(err.user_message(), "Task already assigned");
}

#[test]
fn is_unauthorized_only_for_401() {
    assert!(ApiError::Unauthorized.is_unauthorized());
    assert!(!ApiError::Forbidden.is_unauthorized());
}

#[test]
fn extract_body_message_reads_message_then_error() {
    assert_eq!(extract_body_message(r#"{"message":"bad email"}"#), Some("bad email".to_owned()));
    assert_eq!(extract_body_message(r#"{"error":" missing site "}"#), Some("missing site".to_owned()));
    assert_eq!(extract_body_message(r#"{"detail":"too large"}"#), Some("too large".to_owned()));
}

#[test]
fn extract_body_message_ignores_non_json_and_blank() {
    assert_eq!(extract_body_message("<html>oops</html>"), None);
    assert_eq!(extract_body_message(r#"{"message":"   "}"#), None);
    assert_eq!(extract_body_message(r#"{"status":500}"#), None);
}
