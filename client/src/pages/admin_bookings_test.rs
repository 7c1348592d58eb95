use super::*;

#[test]
fn booking_table_columns() {
    assert_eq!(BOOKING_COLUMNS, &["ID", "Гость", "Телефон", "Даты", "Статус", "Действия"]);
}

#[test]
fn empty_message_is_booking_specific() {
    assert_ne!(NO_BOOKINGS, crate::pages::admin_requests::NO_REQUESTS);
}
