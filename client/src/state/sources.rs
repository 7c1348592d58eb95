//! `ListSource` bindings from each admin table to its REST endpoints.

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::query::{AuditQuery, BookingFilter, NoFilter, RequestFilter};
use crate::net::transport::{BrowserTransport, Transport};
use crate::net::types::{AuditEntry, Booking, BookingRequest, BookingStatus, House};

use super::list_view::{ListSource, StatusSource};

/// `/admin/booking-requests`.
#[derive(Clone, Debug)]
pub struct BookingRequestSource<T = BrowserTransport>(pub ApiClient<T>);

/// `/admin/bookings`.
#[derive(Clone, Debug)]
pub struct BookingSource<T = BrowserTransport>(pub ApiClient<T>);

/// `/admin/houses`.
#[derive(Clone, Debug)]
pub struct HouseSource<T = BrowserTransport>(pub ApiClient<T>);

/// `/admin/audit`.
#[derive(Clone, Debug)]
pub struct AuditSource<T = BrowserTransport>(pub ApiClient<T>);

impl<T: Transport> ListSource for BookingRequestSource<T> {
    type Row = BookingRequest;
    type Filter = RequestFilter;

    async fn fetch(&self, filter: &RequestFilter) -> Result<Vec<BookingRequest>, ApiError> {
        self.0.list_booking_requests(filter).await
    }
}

impl<T: Transport> StatusSource for BookingRequestSource<T> {
    async fn update_status(&self, id: i64, status: BookingStatus) -> Result<(), ApiError> {
        self.0.update_booking_request_status(id, status).await
    }
}

impl<T: Transport> ListSource for BookingSource<T> {
    type Row = Booking;
    type Filter = BookingFilter;

    async fn fetch(&self, filter: &BookingFilter) -> Result<Vec<Booking>, ApiError> {
        self.0.list_bookings(filter).await
    }
}

impl<T: Transport> StatusSource for BookingSource<T> {
    async fn update_status(&self, id: i64, status: BookingStatus) -> Result<(), ApiError> {
        self.0.update_booking_status(id, status).await
    }
}

impl<T: Transport> ListSource for HouseSource<T> {
    type Row = House;
    type Filter = NoFilter;

    async fn fetch(&self, _filter: &NoFilter) -> Result<Vec<House>, ApiError> {
        self.0.list_admin_houses().await
    }
}

impl<T: Transport> ListSource for AuditSource<T> {
    type Row = AuditEntry;
    type Filter = AuditQuery;

    async fn fetch(&self, query: &AuditQuery) -> Result<Vec<AuditEntry>, ApiError> {
        self.0.list_audit(query).await
    }
}
