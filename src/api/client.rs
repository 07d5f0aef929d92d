//! HTTP client for the laundry directory API.
//!
//! Two endpoints: the full service collection and a single service by id.
//! Responses are JSON with camelCase field names.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::LaundryService;

use super::{ApiError, ServiceDirectory};

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// The directory payload is small; 10s fails fast on a dead network.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Maximum number of retries for rate-limited (429) requests.
/// 3 retries with exponential backoff usually succeeds without excessive delay.
const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Initial backoff delay in milliseconds for rate limiting.
/// 1 second is polite to the server while not making users wait too long.
const INITIAL_BACKOFF_MS: u64 = 1000;

/// API client for the laundry directory.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    /// Create a new API client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn auth_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref key) = self.api_key {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", key))?,
            );
        }
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    /// Returns Ok(Some(response)) for success, Ok(None) for rate limit (should retry),
    /// or Err for other errors.
    async fn check_response_for_retry(
        response: reqwest::Response,
    ) -> Result<Option<reqwest::Response>> {
        if response.status().is_success() {
            Ok(Some(response))
        } else if response.status() == StatusCode::TOO_MANY_REQUESTS {
            // Rate limited - signal to retry
            Ok(None)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    /// GET `url`, retrying on 429 with exponential backoff, and return the
    /// final response. A 404 is returned as `Ok(None)`.
    async fn get_raw(&self, url: &str) -> Result<Option<reqwest::Response>> {
        let mut retries = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            let response = self
                .client
                .get(url)
                .headers(self.auth_headers()?)
                .send()
                .await
                .with_context(|| format!("Failed to send GET request to {}", url))?;

            if response.status() == StatusCode::NOT_FOUND {
                return Ok(None);
            }

            match Self::check_response_for_retry(response).await? {
                Some(response) => return Ok(Some(response)),
                None => {
                    // Rate limited
                    retries += 1;
                    if retries > MAX_RATE_LIMIT_RETRIES {
                        return Err(ApiError::RateLimited.into());
                    }
                    warn!(
                        url = url,
                        retry = retries,
                        backoff_ms = backoff_ms,
                        "Rate limited, backing off"
                    );
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms *= 2; // Exponential backoff
                }
            }
        }
    }

    fn services_url(&self) -> String {
        format!("{}/services", self.base_url)
    }

    fn service_url(&self, id: &str) -> String {
        format!("{}/services/{}", self.base_url, id)
    }
}

#[async_trait]
impl ServiceDirectory for ApiClient {
    /// Fetch the full service collection from the directory.
    async fn fetch_all(&self) -> Result<Vec<LaundryService>> {
        let url = self.services_url();
        let response = self
            .get_raw(&url)
            .await?
            .ok_or_else(|| ApiError::NotFound(url.clone()))?;

        let services: Vec<LaundryService> = response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))?;

        debug!(count = services.len(), "Fetched service collection");
        Ok(services)
    }

    /// Fetch one service by id. Missing ids resolve to `Ok(None)`.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<LaundryService>> {
        let url = self.service_url(id);
        let Some(response) = self.get_raw(&url).await? else {
            debug!(id = id, "Service not found in directory");
            return Ok(None);
        };

        let service: LaundryService = response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))?;

        Ok(Some(service))
    }
}
