//! REST API client module for the laundry directory service.
//!
//! This module provides the `ServiceDirectory` trait the cache layer is
//! written against and the `ApiClient` that implements it over HTTP/JSON.
//!
//! The directory API is read-only; an optional bearer key authenticates
//! requests when the deployment requires one.

pub mod client;
pub mod error;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::LaundryService;

pub use client::ApiClient;
pub use error::ApiError;

/// Remote provider of the laundry service collection.
///
/// "Not found" for a single id is a successful `None`, not an error.
/// Implementations own their transport concerns (timeouts, retries);
/// callers only see success, absence, or failure.
#[async_trait]
pub trait ServiceDirectory: Send + Sync {
    /// Fetch the full service collection.
    async fn fetch_all(&self) -> Result<Vec<LaundryService>>;

    /// Fetch one service by id.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<LaundryService>>;
}
