//! Configuration for the HTTP catalog provider.

use std::env;
use std::time::Duration;
use tracing::warn;

/// Default catalog base URL.
const DEFAULT_CATALOG_BASE_URL: &str = "http://localhost:7007/api/catalog";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to each lookup request.
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Create a configuration with the given base URL and the default
    /// timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Build a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CATALOG_BASE_URL`: Catalog API base URL
    ///   (default: http://localhost:7007/api/catalog)
    /// - `CATALOG_TIMEOUT_SECS`: Per-request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let base_url = env::var("CATALOG_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_string());

        let timeout_secs = match env::var("CATALOG_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                warn!(value = %raw, "Invalid CATALOG_TIMEOUT_SECS, using default");
                DEFAULT_TIMEOUT_SECS
            }),
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_BASE_URL)
    }
}
