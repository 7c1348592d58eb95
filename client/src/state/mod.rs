//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data updated through methods; pages wrap it in `RwSignal`s.
//! `list_view` drives the admin tables, `booking_form` and `house_form` the
//! two forms, `sources` binds tables to their endpoints.

pub mod booking_form;
pub mod forms;
pub mod house_form;
pub mod list_view;
pub mod sources;
