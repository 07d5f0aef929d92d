//! Builtin service data for offline use.
//!
//! This module contains the fixed set of laundry services returned when the
//! app runs in builtin-data mode and as the last-resort fallback when both
//! the remote directory and the local cache are unavailable.

pub mod builtin;

pub use builtin::{builtin_service_by_id, builtin_services};
