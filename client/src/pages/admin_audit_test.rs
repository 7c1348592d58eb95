use super::*;

fn entry(created_at: Option<&str>) -> AuditEntry {
    AuditEntry {
        id: 1,
        entity: "house".to_owned(),
        entity_id: Some(3),
        action: "update".to_owned(),
        payload: r#"{"base_price": 7000}"#.to_owned(),
        created_at: created_at.map(str::to_owned),
    }
}

#[test]
fn created_label_falls_back_to_dash() {
    assert_eq!(created_label(&entry(Some("2026-06-01T10:00:00"))), "2026-06-01T10:00:00");
    assert_eq!(created_label(&entry(None)), "-");
}

#[test]
fn audit_table_columns() {
    assert_eq!(AUDIT_COLUMNS.len(), 5);
}
