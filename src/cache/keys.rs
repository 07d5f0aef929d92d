//! Cache key naming.
//!
//! All cached directory data lives under three key shapes in the durable
//! store: one collection key, one per-service key per id, and a single
//! shared timestamp key recording the last successful cache write.

/// Key holding the serialized full service collection.
pub const ALL_SERVICES_KEY: &str = "cached_laundry_services";

/// Prefix for per-service detail keys.
pub const SERVICE_DETAILS_PREFIX: &str = "cached_laundry_service_";

/// Key holding the epoch-milliseconds of the last cache write.
pub const CACHE_TIMESTAMP_KEY: &str = "laundry_services_cache_timestamp";

/// Cache key for a single service's details.
pub fn service_details_key(id: &str) -> String {
    format!("{}{}", SERVICE_DETAILS_PREFIX, id)
}

/// Whether `key` belongs to the service cache namespace.
pub fn is_service_cache_key(key: &str) -> bool {
    key == ALL_SERVICES_KEY
        || key == CACHE_TIMESTAMP_KEY
        || key.starts_with(SERVICE_DETAILS_PREFIX)
}
