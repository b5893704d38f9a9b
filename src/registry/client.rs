//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with a configurable timeout
//! and User-Agent. Status codes are not interpreted here: the adapter
//! decides what a non-200 response means (for tag listing it is data,
//! not an error). No retries.

use crate::error::RegistryError;
use reqwest::Client;
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("composepin/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                RegistryError::network_error(
                    String::new(),
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { client })
    }

    /// Perform a single GET request with error context
    pub async fn get(&self, url: &str, image: &str) -> Result<reqwest::Response, RegistryError> {
        match self.client.get(url).send().await {
            Ok(response) => Ok(response),
            Err(e) if e.is_timeout() => Err(RegistryError::timeout(image)),
            Err(e) => Err(RegistryError::network_error(image, e.to_string())),
        }
    }
}
