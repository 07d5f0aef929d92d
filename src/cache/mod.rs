//! Local caching module for offline data access.
//!
//! This module provides the `ServiceCache` that mediates between the
//! application state layer and the remote directory. Cached data is stored
//! as JSON in a durable key-value store and considered stale after one
//! hour; stale entries still serve as a fallback when the remote fails.

pub mod keys;
pub mod manager;

pub use keys::{service_details_key, ALL_SERVICES_KEY, CACHE_TIMESTAMP_KEY, SERVICE_DETAILS_PREFIX};
pub use manager::{DataOrigin, Fetched, ServiceCache};
