use super::*;

#[test]
fn date_range_joins_with_arrow() {
    assert_eq!(date_range("2026-07-01", "2026-07-05"), "2026-07-01 → 2026-07-05");
}

#[test]
fn empty_row_spans_every_column() {
    assert_eq!(empty_row_span(&["ID", "Имя", "Телефон", "Даты", "Статус", "Действия"]), 6);
    assert_eq!(empty_row_span(&[]), 1);
}
