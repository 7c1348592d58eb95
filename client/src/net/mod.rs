//! Networking modules for the booking REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the typed client, `transport` the fetch seam it sends through,
//! `query` the list filters, `types` the wire records and `error` the shared
//! failure type.

pub mod api;
pub mod error;
pub mod query;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
