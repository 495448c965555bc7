//! Catalog provider trait definition.
//!
//! This module defines the abstract interface for resolving entity
//! references against the catalog, allowing different backend
//! implementations (HTTP gateway, in-memory fixtures for tests, etc.).

use async_trait::async_trait;
use ownership_resolver_shared::{AuthContext, Entity, EntityRef};

use crate::errors::CatalogError;

/// Abstracts the catalog service that owns entity records.
///
/// Implementations are injected into the closure walker and ownership
/// service, enabling dependency injection and easy testing with mock
/// implementations.
///
/// # Note on Missing Entities
///
/// `entities_by_refs` returns only the subset of requested references that
/// currently exist and are visible under the given authorization context.
/// References that cannot be resolved (deleted entities, insufficient
/// permissions) are simply absent from the result; absence is never an
/// error. Partial catalog staleness is expected in the external system.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Resolve a batch of entity references to entity records.
    ///
    /// Duplicate references in the request are tolerated. The order of the
    /// returned records is not significant.
    ///
    /// # Arguments
    ///
    /// * `refs` - The references to resolve
    /// * `ctx` - Caller credentials, passed through to the catalog unmodified
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Entity>)` - The resolvable subset of the requested records
    /// * `Err(CatalogError)` - If the lookup fails as a whole
    async fn entities_by_refs(
        &self,
        refs: &[EntityRef],
        ctx: &AuthContext,
    ) -> Result<Vec<Entity>, CatalogError>;
}
