use super::*;

#[test]
fn booking_status_wire_values() {
    let values: Vec<&str> = BookingStatus::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(values, ["new", "in_progress", "confirmed", "cancelled"]);
    assert_eq!(serde_json::to_string(&BookingStatus::InProgress).unwrap(), "\"in_progress\"");
}

#[test]
fn booking_status_parses_only_known_values() {
    assert_eq!("confirmed".parse::<BookingStatus>(), Ok(BookingStatus::Confirmed));
    assert_eq!("".parse::<BookingStatus>(), Err(UnknownStatus(String::new())));
    assert!("paid".parse::<BookingStatus>().is_err());
}

#[test]
fn row_status_keeps_unknown_values() {
    let known: RowStatus = serde_json::from_str("\"cancelled\"").unwrap();
    assert_eq!(known, RowStatus::Known(BookingStatus::Cancelled));
    assert!(known.is(BookingStatus::Cancelled));

    let other: RowStatus = serde_json::from_str("\"checked_in\"").unwrap();
    assert_eq!(other, RowStatus::Other("checked_in".to_owned()));
    assert_eq!(other.known(), None);
    assert_eq!(other.to_string(), "checked_in");
}

#[test]
fn booking_request_decodes_backend_row() {
    let json = r#"{
        "id": 7,
        "house_id": null,
        "guest_name": "Анна",
        "guest_phone": "+79990001122",
        "guest_comment": "",
        "check_in": "2026-07-01",
        "check_out": "2026-07-05",
        "guests_count": 3,
        "status": "new",
        "source": "website",
        "created_at": "2026-06-01T10:00:00"
    }"#;
    let row: BookingRequest = serde_json::from_str(json).unwrap();
    assert_eq!(row.id, 7);
    assert_eq!(row.house_id, None);
    assert_eq!(row.guests_count, 3);
    assert_eq!(row.status, RowStatus::Known(BookingStatus::New));
    assert_eq!(row.created_at.as_deref(), Some("2026-06-01T10:00:00"));
}

#[test]
fn house_defaults_missing_optional_text() {
    let house: House =
        serde_json::from_str(r#"{"id":1,"name":"Кедр","capacity":4,"base_price":6500}"#).unwrap();
    assert_eq!(house.slug, "");
    assert_eq!(house.short_description, "");
}

#[test]
fn audit_entry_subject_handles_missing_id() {
    let entry: AuditEntry = serde_json::from_str(
        r#"{"id":1,"entity":"booking","entity_id":null,"action":"create","payload":null,"created_at":null}"#,
    )
    .unwrap();
    assert_eq!(entry.subject(), "booking:-");
    assert_eq!(entry.payload, "");

    let entry = AuditEntry { entity_id: Some(42), ..entry };
    assert_eq!(entry.subject(), "booking:42");
}

#[test]
fn status_update_serializes_wire_value() {
    let body = serde_json::to_value(StatusUpdate { status: BookingStatus::Confirmed }).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "confirmed" }));
}
