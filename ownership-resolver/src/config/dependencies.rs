//! Dependency initialization and wiring for the ownership resolver.

use ownership_resolver_repository::{CatalogConfig, HttpCatalogProvider};
use std::sync::Arc;
use tracing::info;

use crate::errors::OwnershipError;
use crate::service::OwnershipService;

/// Container for all initialized dependencies.
///
/// Embedding hosts construct this once at startup and keep the service for
/// the process lifetime; the service itself holds no per-invocation state.
pub struct Dependencies {
    /// The configured ownership service ready to resolve.
    pub ownership: OwnershipService,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CATALOG_BASE_URL`: Catalog API base URL
    ///   (default: http://localhost:7007/api/catalog)
    /// - `CATALOG_TIMEOUT_SECS`: Per-request timeout in seconds (default: 30)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(OwnershipError)` - If the catalog provider cannot be built
    pub fn new() -> Result<Self, OwnershipError> {
        let config = CatalogConfig::from_env();

        info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            "Initializing ownership resolver dependencies"
        );

        let provider = HttpCatalogProvider::new(config)?;
        let ownership = OwnershipService::new(Arc::new(provider));

        Ok(Self { ownership })
    }
}
