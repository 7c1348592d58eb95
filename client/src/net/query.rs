//! List filters and query-string construction.
//!
//! DESIGN
//! ======
//! Each filter knows its own parameter names; `with_query` drops empty values
//! so a cleared control removes its parameter instead of sending `status=`.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use super::types::BookingStatus;

/// Default page size requested by the audit view.
pub const DEFAULT_AUDIT_LIMIT: u32 = 200;

/// A filter that can be rendered as query parameters.
pub trait QueryParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Append non-empty `pairs` to `path` as a percent-encoded query string.
pub fn with_query(path: &str, pairs: &[(&'static str, String)]) -> String {
    let encoded: Vec<String> = pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    if encoded.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{}", encoded.join("&"))
    }
}

/// Lists without filter controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoFilter;

impl QueryParams for NoFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Filter controls of the booking-request list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub status: Option<BookingStatus>,
    /// Free-text match on guest name or phone.
    pub search: String,
}

impl QueryParams for RequestFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("status", status_param(self.status)),
            ("q", self.search.trim().to_owned()),
        ]
    }
}

/// Filter controls of the bookings list. Dates are `YYYY-MM-DD` as produced
/// by `<input type="date">`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub date_from: String,
    pub date_to: String,
}

impl QueryParams for BookingFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("status", status_param(self.status)),
            ("date_from", self.date_from.trim().to_owned()),
            ("date_to", self.date_to.trim().to_owned()),
        ]
    }
}

/// Page-size limit of the audit list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuditQuery {
    pub limit: u32,
}

impl Default for AuditQuery {
    fn default() -> Self {
        Self { limit: DEFAULT_AUDIT_LIMIT }
    }
}

impl QueryParams for AuditQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("limit", self.limit.to_string())]
    }
}

fn status_param(status: Option<BookingStatus>) -> String {
    status.map(|s| s.as_str().to_owned()).unwrap_or_default()
}

/// Parse the value of a status `<select>`; the empty option means "any".
pub fn parse_status_option(value: &str) -> Option<BookingStatus> {
    value.parse().ok()
}
