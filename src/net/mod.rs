//! Networking modules for the notification endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the JSON bodies and
//! `notifications` turns counts into badge updates on a fixed interval.

pub mod api;
pub mod notifications;
pub mod types;
