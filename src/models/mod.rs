//! Data models for laundry directory entities.
//!
//! This module contains the data structures used to represent
//! directory data:
//!
//! - `LaundryService`: one laundry business with pricing and contact info
//! - `Location`, `ContactInfo`: nested value types

pub mod service;

pub use service::{ContactInfo, LaundryService, Location};
