//! Ownership resolution service.
//!
//! This module defines the `OwnershipService` responsible for orchestrating
//! the two closure walks over the catalog's group graph and merging their
//! results with the initial membership entities.

use ownership_resolver_repository::CatalogProvider;
use ownership_resolver_shared::{AuthContext, Entity, EntityRef, RelationType};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::errors::OwnershipError;
use crate::relations::relation_refs;
use crate::walker::GroupClosureWalker;

/// Resolves the full ownership set for a subject's direct memberships.
///
/// Given an initial set of membership references, the service returns the
/// deduplicated union of:
///
/// - the entities directly resolved from the initial references, regardless
///   of kind,
/// - all ancestor groups reachable by walking `childOf` from the initial
///   set's group subset,
/// - all descendant groups reachable by walking `parentOf` from the initial
///   set's group subset.
///
/// The two walks have no data dependency on each other and run
/// concurrently; sequential execution would produce an identical result.
/// No retries are performed internally, and no state is held between
/// invocations.
pub struct OwnershipService {
    catalog: Arc<dyn CatalogProvider>,
    walker: GroupClosureWalker,
}

impl OwnershipService {
    /// Create a new service over the given catalog.
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        let walker = GroupClosureWalker::new(catalog.clone());
        Self { catalog, walker }
    }

    /// Resolve the ownership closure of `initial_refs`.
    ///
    /// # Arguments
    ///
    /// * `initial_refs` - The subject's direct membership references
    /// * `ctx` - Caller credentials passed through to the catalog
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Entity>)` - The merged ownership set; order is not
    ///   significant and each reference appears once
    /// * `Err(OwnershipError)` - If any catalog lookup fails; no partial
    ///   result is returned
    pub async fn resolve_ownership(
        &self,
        initial_refs: &[EntityRef],
        ctx: &AuthContext,
    ) -> Result<Vec<Entity>, OwnershipError> {
        let initial = self.catalog.entities_by_refs(initial_refs, ctx).await?;

        // Walks are seeded from the group subset only; non-group initial
        // entities stay in the result but contribute no expansion.
        let initial_groups: Vec<&Entity> = initial.iter().filter(|e| e.is_group()).collect();

        let parent_refs = relation_refs(initial_groups.iter().copied(), RelationType::ChildOf);
        let child_refs = relation_refs(initial_groups.iter().copied(), RelationType::ParentOf);

        let (ancestors, descendants) = tokio::try_join!(
            self.walker.walk(parent_refs, RelationType::ChildOf, ctx),
            self.walker.walk(child_refs, RelationType::ParentOf, ctx),
        )?;

        debug!(
            initial = initial.len(),
            ancestors = ancestors.len(),
            descendants = descendants.len(),
            "Merging ownership sets"
        );

        let mut merged: HashMap<EntityRef, Entity> = HashMap::new();
        for entity in initial
            .into_iter()
            .chain(ancestors)
            .chain(descendants)
        {
            merged.entry(entity.entity_ref.clone()).or_insert(entity);
        }

        Ok(merged.into_values().collect())
    }
}
