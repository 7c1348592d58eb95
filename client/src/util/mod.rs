//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser task plumbing from page and component
//! logic so the state modules stay plain data.

pub mod tasks;
