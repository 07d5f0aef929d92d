//! Application state for the services screen.
//!
//! `ServicesStore` holds the in-memory service list plus the loading and
//! error flags presentation code renders from, and republishes results
//! from the cache layer. All data access goes through `ServiceCache`;
//! this layer never talks to the store or the network directly.

use tracing::{debug, info};

use crate::cache::{DataOrigin, ServiceCache};
use crate::models::LaundryService;

pub struct ServicesStore {
    cache: ServiceCache,
    services: Vec<LaundryService>,
    is_loading: bool,
    error: Option<String>,
    last_origin: Option<DataOrigin>,
}

impl ServicesStore {
    pub fn new(cache: ServiceCache) -> Self {
        Self {
            cache,
            services: Vec::new(),
            is_loading: false,
            error: None,
            last_origin: None,
        }
    }

    pub fn services(&self) -> &[LaundryService] {
        &self.services
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Last fetch failure message, if any. The cache layer is infallible
    /// on read paths, so this stays empty in normal operation; it exists
    /// for the presentation contract.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Where the current service list came from. Presentation uses this
    /// to flag possibly-outdated data.
    pub fn last_origin(&self) -> Option<DataOrigin> {
        self.last_origin
    }

    /// Load the service list, preferring cache per the staleness policy.
    pub async fn fetch_services(&mut self) {
        self.is_loading = true;
        self.error = None;

        let fetched = self.cache.all_services().await;
        info!(
            count = fetched.value.len(),
            origin = fetched.origin.label(),
            "Service list updated"
        );

        self.services = fetched.value;
        self.last_origin = Some(fetched.origin);
        self.is_loading = false;
    }

    /// Drop all cached data, then load fresh from the remote.
    pub async fn refresh_services(&mut self) {
        self.cache.clear().await;
        self.fetch_services().await;
    }

    /// Look up one service, serving from the in-memory list when present.
    pub async fn service_by_id(&self, id: &str) -> Option<LaundryService> {
        if let Some(service) = self.services.iter().find(|s| s.id == id) {
            debug!(id = id, "Serving service from in-memory list");
            return Some(service.clone());
        }

        self.cache.service_by_id(id).await.value
    }

    /// Drop all cached data without refetching.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }
}
