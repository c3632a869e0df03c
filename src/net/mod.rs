//! Networking modules for the contact submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! `payload` defines the JSON wire shape and `api` delivers it to the
//! configured endpoint.

pub mod api;
pub mod payload;
