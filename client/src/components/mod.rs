//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they receive signals and callbacks from
//! the pages and never fetch on their own.

pub mod admin_nav;
pub mod data_table;
pub mod list_feedback;
pub mod status_actions;
pub mod status_filter;
pub mod status_summary;
