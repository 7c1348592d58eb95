//! Typed REST client for the booking backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page talks to the backend through `ApiClient`. The client owns the
//! base URL and a `Transport`; it builds paths, encodes JSON bodies and maps
//! non-2xx answers to `ApiError::Status` with the backend's `detail` text.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here panics or swallows failures. Views decide how to render the
//! returned `ApiError`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::query::{AuditQuery, BookingFilter, NoFilter, QueryParams, RequestFilter, with_query};
use super::transport::{BrowserTransport, HttpRequest, HttpResponse, Method, Transport};
use super::types::{
    AuditEntry, Booking, BookingRequest, BookingStatus, Created, House, NewBookingRequest, NewHouse, StatusUpdate,
};

const PUBLIC_HOUSES_PATH: &str = "/houses";
const ADMIN_HOUSES_PATH: &str = "/admin/houses";
const BOOKING_REQUESTS_PATH: &str = "/booking-requests";
const ADMIN_BOOKING_REQUESTS_PATH: &str = "/admin/booking-requests";
const ADMIN_BOOKINGS_PATH: &str = "/admin/bookings";
const ADMIN_AUDIT_PATH: &str = "/admin/audit";

fn booking_request_endpoint(id: i64) -> String {
    format!("{ADMIN_BOOKING_REQUESTS_PATH}/{id}")
}

fn booking_endpoint(id: i64) -> String {
    format!("{ADMIN_BOOKINGS_PATH}/{id}")
}

/// Trim trailing slashes so paths can be appended verbatim.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// REST client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient<T = BrowserTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<BrowserTransport> {
    /// Client using the browser `fetch` transport.
    pub fn browser(base_url: &str) -> Self {
        Self::new(base_url, BrowserTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self { base_url: normalize_base_url(base_url), transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // -------------------------------------------------------------------------
    // HOUSES
    // -------------------------------------------------------------------------

    /// `GET /houses`: public catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a house list.
    pub async fn list_public_houses(&self) -> Result<Vec<House>, ApiError> {
        self.get_json(PUBLIC_HOUSES_PATH, &NoFilter).await
    }

    /// `GET /admin/houses`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a house list.
    pub async fn list_admin_houses(&self) -> Result<Vec<House>, ApiError> {
        self.get_json(ADMIN_HOUSES_PATH, &NoFilter).await
    }

    /// `POST /admin/houses`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the house.
    pub async fn create_house(&self, house: &NewHouse) -> Result<(), ApiError> {
        self.send_json(Method::Post, ADMIN_HOUSES_PATH, house).await.map(|_| ())
    }

    // -------------------------------------------------------------------------
    // BOOKING REQUESTS
    // -------------------------------------------------------------------------

    /// `POST /booking-requests`: public booking form submission.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` carrying the backend `detail` on rejection.
    pub async fn create_booking_request(&self, request: &NewBookingRequest) -> Result<Created, ApiError> {
        let resp = self.send_json(Method::Post, BOOKING_REQUESTS_PATH, request).await?;
        decode(&resp)
    }

    /// `GET /admin/booking-requests[?status=][&q=]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a row does not decode.
    pub async fn list_booking_requests(&self, filter: &RequestFilter) -> Result<Vec<BookingRequest>, ApiError> {
        self.get_json(ADMIN_BOOKING_REQUESTS_PATH, filter).await
    }

    /// `PATCH /admin/booking-requests/{id}` with `{status}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn update_booking_request_status(&self, id: i64, status: BookingStatus) -> Result<(), ApiError> {
        self.send_json(Method::Patch, &booking_request_endpoint(id), &StatusUpdate { status })
            .await
            .map(|_| ())
    }

    // -------------------------------------------------------------------------
    // BOOKINGS
    // -------------------------------------------------------------------------

    /// `GET /admin/bookings[?status=][&date_from=][&date_to=]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a row does not decode.
    pub async fn list_bookings(&self, filter: &BookingFilter) -> Result<Vec<Booking>, ApiError> {
        self.get_json(ADMIN_BOOKINGS_PATH, filter).await
    }

    /// `PATCH /admin/bookings/{id}` with `{status}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn update_booking_status(&self, id: i64, status: BookingStatus) -> Result<(), ApiError> {
        self.send_json(Method::Patch, &booking_endpoint(id), &StatusUpdate { status })
            .await
            .map(|_| ())
    }

    // -------------------------------------------------------------------------
    // AUDIT
    // -------------------------------------------------------------------------

    /// `GET /admin/audit?limit=N`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or an entry does not decode.
    pub async fn list_audit(&self, query: &AuditQuery) -> Result<Vec<AuditEntry>, ApiError> {
        self.get_json(ADMIN_AUDIT_PATH, query).await
    }

    // -------------------------------------------------------------------------
    // PLUMBING
    // -------------------------------------------------------------------------

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<R, Q>(&self, path: &str, query: &Q) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        Q: QueryParams,
    {
        let request = HttpRequest { method: Method::Get, url: self.url(&with_query(path, &query.query_pairs())), body: None };
        let resp = self.dispatch(request).await?;
        decode(&resp)
    }

    async fn send_json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.dispatch(HttpRequest { method, url: self.url(path), body: Some(body) }).await
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let resp = self.transport.send(request).await?;
        if resp.is_ok() {
            Ok(resp)
        } else {
            Err(ApiError::from_status(resp.status, &resp.body))
        }
    }
}

fn decode<R: DeserializeOwned>(resp: &HttpResponse) -> Result<R, ApiError> {
    // A `null` list body renders as an empty table.
    let body = if resp.body.trim() == "null" { "[]" } else { resp.body.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
