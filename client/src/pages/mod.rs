//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `landing` is the public site; the `admin_*` pages are the staff views,
//! each one list backed by one REST collection.

pub mod admin_audit;
pub mod admin_bookings;
pub mod admin_houses;
pub mod admin_requests;
pub mod landing;
