//! HTTP implementation of the catalog provider.
//!
//! This module provides the concrete implementation of `CatalogProvider`
//! against the catalog's batch lookup endpoint: references are POSTed as a
//! JSON batch to `{base_url}/entities/by-refs` and the response carries one
//! item per requested reference, `null` where a reference could not be
//! resolved.

use async_trait::async_trait;
use ownership_resolver_shared::{AuthContext, Entity, EntityRef};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};
use url::Url;

use crate::config::CatalogConfig;
use crate::errors::CatalogError;
use crate::interfaces::CatalogProvider;

/// Request body for the batch lookup endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ByRefsRequest<'a> {
    entity_refs: &'a [EntityRef],
}

/// Response body of the batch lookup endpoint.
///
/// Items are positional per requested reference; unresolvable references
/// come back as `null`.
#[derive(Debug, Deserialize)]
struct ByRefsResponse {
    items: Vec<Option<Entity>>,
}

/// Catalog provider backed by the catalog's REST API.
///
/// # Example
///
/// ```ignore
/// use ownership_resolver_repository::{CatalogConfig, HttpCatalogProvider};
///
/// let config = CatalogConfig::new("http://localhost:7007/api/catalog");
/// let provider = HttpCatalogProvider::new(config)?;
/// let entities = provider.entities_by_refs(&refs, &ctx).await?;
/// ```
pub struct HttpCatalogProvider {
    client: reqwest::Client,
    by_refs_url: Url,
}

impl HttpCatalogProvider {
    /// Create a new provider for the configured catalog.
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL and request timeout for the catalog service
    ///
    /// # Returns
    ///
    /// * `Ok(HttpCatalogProvider)` - A new provider instance
    /// * `Err(CatalogError)` - If the base URL is invalid or the HTTP
    ///   client cannot be constructed
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let base = config.base_url.trim_end_matches('/');
        let by_refs_url = Url::parse(&format!("{}/entities/by-refs", base))
            .map_err(|e| CatalogError::config(e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::connection(e.to_string()))?;

        info!(
            base_url = %base,
            timeout_secs = config.timeout.as_secs(),
            "Created HTTP catalog provider"
        );

        Ok(Self {
            client,
            by_refs_url,
        })
    }
}

/// Deduplicate references preserving first-seen order.
///
/// The response is positional per requested reference, so duplicate
/// positions carry no information and are stripped before the wire call.
fn dedup_refs(refs: &[EntityRef]) -> Vec<EntityRef> {
    let mut seen: HashSet<&EntityRef> = HashSet::new();
    refs.iter()
        .filter(|r| seen.insert(*r))
        .cloned()
        .collect()
}

#[async_trait]
impl CatalogProvider for HttpCatalogProvider {
    async fn entities_by_refs(
        &self,
        refs: &[EntityRef],
        ctx: &AuthContext,
    ) -> Result<Vec<Entity>, CatalogError> {
        if refs.is_empty() {
            return Ok(Vec::new());
        }

        let unique_refs = dedup_refs(refs);
        let body = ByRefsRequest {
            entity_refs: &unique_refs,
        };

        let mut request = self.client.post(self.by_refs_url.clone()).json(&body);
        if let Some(token) = ctx.token() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::gateway(status.as_u16(), message));
        }

        let decoded: ByRefsResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::parse(e.to_string()))?;

        let entities: Vec<Entity> = decoded.items.into_iter().flatten().collect();

        debug!(
            requested = unique_refs.len(),
            resolved = entities.len(),
            "Resolved entity batch"
        );

        Ok(entities)
    }
}
