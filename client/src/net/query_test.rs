use super::*;

#[test]
fn with_query_omits_question_mark_when_nothing_set() {
    assert_eq!(with_query("/admin/booking-requests", &RequestFilter::default().query_pairs()), "/admin/booking-requests");
    assert_eq!(with_query("/admin/houses", &NoFilter.query_pairs()), "/admin/houses");
}

#[test]
fn status_filter_is_included_exactly_once() {
    let filter = RequestFilter { status: Some(BookingStatus::InProgress), search: String::new() };
    assert_eq!(
        with_query("/admin/booking-requests", &filter.query_pairs()),
        "/admin/booking-requests?status=in_progress"
    );
}

#[test]
fn cleared_status_filter_is_omitted() {
    let mut filter = RequestFilter { status: Some(BookingStatus::New), search: "Анна".to_owned() };
    filter.status = None;
    let url = with_query("/admin/booking-requests", &filter.query_pairs());
    assert!(!url.contains("status="));
    assert_eq!(url, "/admin/booking-requests?q=%D0%90%D0%BD%D0%BD%D0%B0");
}

#[test]
fn search_is_trimmed_and_encoded() {
    let filter = RequestFilter { status: None, search: "  +7 999  ".to_owned() };
    assert_eq!(with_query("/x", &filter.query_pairs()), "/x?q=%2B7%20999");

    let blank = RequestFilter { status: None, search: "   ".to_owned() };
    assert_eq!(with_query("/x", &blank.query_pairs()), "/x");
}

#[test]
fn booking_filter_keeps_parameter_order() {
    let filter = BookingFilter {
        status: Some(BookingStatus::Confirmed),
        date_from: "2026-07-01".to_owned(),
        date_to: "2026-07-31".to_owned(),
    };
    assert_eq!(
        with_query("/admin/bookings", &filter.query_pairs()),
        "/admin/bookings?status=confirmed&date_from=2026-07-01&date_to=2026-07-31"
    );
}

#[test]
fn booking_filter_sends_only_set_dates() {
    let filter = BookingFilter { status: None, date_from: String::new(), date_to: "2026-08-01".to_owned() };
    assert_eq!(with_query("/admin/bookings", &filter.query_pairs()), "/admin/bookings?date_to=2026-08-01");
}

#[test]
fn audit_query_defaults_to_two_hundred() {
    assert_eq!(with_query("/admin/audit", &AuditQuery::default().query_pairs()), "/admin/audit?limit=200");
}

#[test]
fn parse_status_option_treats_empty_as_any() {
    assert_eq!(parse_status_option(""), None);
    assert_eq!(parse_status_option("cancelled"), Some(BookingStatus::Cancelled));
}
