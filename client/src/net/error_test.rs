use super::*;

#[test]
fn detail_from_body_reads_string_detail() {
    assert_eq!(detail_from_body(r#"{"detail":"Slug already exists"}"#).as_deref(), Some("Slug already exists"));
}

#[test]
fn detail_from_body_joins_validation_messages() {
    let body = r#"{"detail":[{"loc":["body","guest_phone"],"msg":"too short"},{"msg":"check_out must be after check_in"}]}"#;
    assert_eq!(
        detail_from_body(body).as_deref(),
        Some("too short; check_out must be after check_in")
    );
}

#[test]
fn detail_from_body_ignores_non_json_and_missing_detail() {
    assert_eq!(detail_from_body("Internal Server Error"), None);
    assert_eq!(detail_from_body(r#"{"error":"x"}"#), None);
    assert_eq!(detail_from_body(r#"{"detail":[]}"#), None);
}

#[test]
fn from_status_keeps_status_and_detail() {
    let err = ApiError::from_status(404, r#"{"detail":"Booking not found"}"#);
    assert_eq!(err, ApiError::Status { status: 404, detail: Some("Booking not found".to_owned()) });
    assert_eq!(err.detail(), Some("Booking not found"));
}

#[test]
fn display_includes_status_and_detail() {
    assert_eq!(ApiError::from_status(500, "").to_string(), "request failed (500)");
    assert_eq!(
        ApiError::from_status(400, r#"{"detail":"bad"}"#).to_string(),
        "request failed (400): bad"
    );
    assert_eq!(ApiError::Network("offline".into()).to_string(), "network error: offline");
}

#[test]
fn detail_is_none_for_non_status_errors() {
    assert_eq!(ApiError::Unavailable.detail(), None);
    assert_eq!(ApiError::Decode("x".into()).detail(), None);
}
