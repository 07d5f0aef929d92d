//! Cache-aside access to the laundry service directory.
//!
//! `ServiceCache` sits between the application state layer and the remote
//! directory. Reads prefer the durable cache while it is fresh, refetch
//! from the remote when it is not, and degrade through stale cache data
//! down to the builtin dataset when the remote is unreachable. Lookups
//! never fail; every result is tagged with the `DataOrigin` that produced
//! it so callers and tests can observe which path ran.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::api::ServiceDirectory;
use crate::data::{builtin_service_by_id, builtin_services};
use crate::models::LaundryService;
use crate::storage::KeyValueStore;

use super::keys::{
    is_service_cache_key, service_details_key, ALL_SERVICES_KEY, CACHE_TIMESTAMP_KEY,
};

/// Consider cached data stale after 1 hour.
/// Balances freshness with reducing unnecessary API calls for slowly-changing data.
const CACHE_MAX_AGE_MS: i64 = 60 * 60 * 1000;

/// Simulated fetch latency when serving the builtin dataset.
const BUILTIN_FETCH_DELAY_MS: u64 = 500;

/// Which layer answered a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Fresh cache entry, no remote call made.
    Cache,
    /// Fetched from the remote directory this call.
    Remote,
    /// Remote failed; an expired cache entry was served instead.
    StaleCache,
    /// The builtin dataset, either by configuration or as the last resort.
    Builtin,
}

impl DataOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            DataOrigin::Cache => "cache",
            DataOrigin::Remote => "remote",
            DataOrigin::StaleCache => "stale cache",
            DataOrigin::Builtin => "builtin data",
        }
    }
}

/// A lookup result together with the layer that produced it.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub value: T,
    pub origin: DataOrigin,
}

impl<T> Fetched<T> {
    fn new(value: T, origin: DataOrigin) -> Self {
        Self { value, origin }
    }
}

/// Cache-aside manager for directory reads.
///
/// Constructed once with its durable store and remote directory
/// collaborators. Concurrent calls are not deduplicated: each runs the
/// full algorithm, and overlapping cache writes are last-writer-wins on
/// atomic per-key puts.
pub struct ServiceCache {
    store: Arc<dyn KeyValueStore>,
    directory: Arc<dyn ServiceDirectory>,
    use_builtin_data: bool,
}

impl ServiceCache {
    pub fn new(store: Arc<dyn KeyValueStore>, directory: Arc<dyn ServiceDirectory>) -> Self {
        Self {
            store,
            directory,
            use_builtin_data: false,
        }
    }

    /// Serve the builtin dataset instead of touching cache or network.
    pub fn with_builtin_data(mut self, enabled: bool) -> Self {
        self.use_builtin_data = enabled;
        self
    }

    // ===== Staleness policy =====

    /// Whether the shared cache timestamp is within the staleness window.
    ///
    /// The timestamp is shared across all cache keys: writing any entry
    /// renews the perceived freshness of every other entry.
    async fn is_cache_fresh(&self) -> bool {
        let raw = match self.store.get(CACHE_TIMESTAMP_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(e) => {
                debug!(error = %e, "Failed to read cache timestamp, treating as stale");
                return false;
            }
        };

        let Ok(written_ms) = raw.trim().parse::<i64>() else {
            debug!(raw = %raw, "Unparsable cache timestamp, treating as stale");
            return false;
        };

        Utc::now().timestamp_millis() - written_ms < CACHE_MAX_AGE_MS
    }

    /// Record now as the time of the last successful cache write.
    async fn touch_timestamp(&self) {
        let now_ms = Utc::now().timestamp_millis().to_string();
        if let Err(e) = self.store.set(CACHE_TIMESTAMP_KEY, &now_ms).await {
            warn!(error = %e, "Failed to update cache timestamp");
        }
    }

    // ===== Cache entry I/O =====

    /// Read and deserialize a cache entry. Storage errors and corrupt
    /// payloads both count as a miss.
    async fn read_entry<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                debug!(key = key, error = %e, "Failed to read cache entry");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key = key, error = %e, "Discarding undecodable cache entry");
                None
            }
        }
    }

    /// Serialize and write a cache entry. Failures are logged and the
    /// write is skipped; the caller still has the live value.
    async fn write_entry<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = key, error = %e, "Failed to serialize cache entry");
                return;
            }
        };
        if let Err(e) = self.store.set(key, &raw).await {
            warn!(key = key, error = %e, "Cache write skipped");
        }
    }

    // ===== Lookups =====

    /// Fetch the full service collection.
    ///
    /// Resolution order: builtin mode, fresh cache, remote, stale cache,
    /// builtin dataset. Always resolves to a (possibly empty) list.
    pub async fn all_services(&self) -> Fetched<Vec<LaundryService>> {
        if self.use_builtin_data {
            tokio::time::sleep(Duration::from_millis(BUILTIN_FETCH_DELAY_MS)).await;
            return Fetched::new(builtin_services(), DataOrigin::Builtin);
        }

        if self.is_cache_fresh().await {
            if let Some(services) = self
                .read_entry::<Vec<LaundryService>>(ALL_SERVICES_KEY)
                .await
            {
                if !services.is_empty() {
                    debug!(count = services.len(), "Serving services from cache");
                    return Fetched::new(services, DataOrigin::Cache);
                }
            }
        }

        match self.directory.fetch_all().await {
            Ok(services) => {
                // An empty collection is returned to the caller but never
                // cached, so the next read asks the remote again.
                if !services.is_empty() {
                    self.write_entry(ALL_SERVICES_KEY, &services).await;
                    self.touch_timestamp().await;
                }
                Fetched::new(services, DataOrigin::Remote)
            }
            Err(e) => {
                warn!(error = %e, "Directory fetch failed, falling back to cache");

                if let Some(services) = self
                    .read_entry::<Vec<LaundryService>>(ALL_SERVICES_KEY)
                    .await
                {
                    return Fetched::new(services, DataOrigin::StaleCache);
                }

                Fetched::new(builtin_services(), DataOrigin::Builtin)
            }
        }
    }

    /// Fetch one service by id.
    ///
    /// Mirrors `all_services` with per-id cache keys. A remote "not found"
    /// is a successful `None` and still renews the shared timestamp: the
    /// miss was a full round-trip against the current dataset.
    pub async fn service_by_id(&self, id: &str) -> Fetched<Option<LaundryService>> {
        if self.use_builtin_data {
            tokio::time::sleep(Duration::from_millis(BUILTIN_FETCH_DELAY_MS)).await;
            return Fetched::new(builtin_service_by_id(id), DataOrigin::Builtin);
        }

        let key = service_details_key(id);

        if self.is_cache_fresh().await {
            if let Some(service) = self.read_entry::<LaundryService>(&key).await {
                debug!(id = id, "Serving service from cache");
                return Fetched::new(Some(service), DataOrigin::Cache);
            }
        }

        match self.directory.fetch_by_id(id).await {
            Ok(found) => {
                if let Some(ref service) = found {
                    self.write_entry(&key, service).await;
                }
                self.touch_timestamp().await;
                Fetched::new(found, DataOrigin::Remote)
            }
            Err(e) => {
                warn!(id = id, error = %e, "Directory fetch failed, falling back to cache");

                if let Some(service) = self.read_entry::<LaundryService>(&key).await {
                    return Fetched::new(Some(service), DataOrigin::StaleCache);
                }

                Fetched::new(builtin_service_by_id(id), DataOrigin::Builtin)
            }
        }
    }

    // ===== Invalidation =====

    /// Remove every cache entry in the service namespace.
    ///
    /// Storage failures are logged and swallowed; an empty namespace is a
    /// no-op.
    pub async fn clear(&self) {
        let keys = match self.store.list_keys().await {
            Ok(keys) => keys,
            Err(e) => {
                warn!(error = %e, "Failed to enumerate cache keys");
                return;
            }
        };

        let cache_keys: Vec<String> = keys
            .into_iter()
            .filter(|k| is_service_cache_key(k))
            .collect();

        if cache_keys.is_empty() {
            return;
        }

        match self.store.delete_many(&cache_keys).await {
            Ok(()) => debug!(removed = cache_keys.len(), "Service cache cleared"),
            Err(e) => warn!(error = %e, "Failed to clear service cache"),
        }
    }
}
