//! Group closure traversal.
//!
//! Computes the transitive closure of group entities reachable from a seed
//! frontier by repeated relation expansion, using an iterative breadth-first
//! walk over the catalog.
//!
//! Each iteration resolves the entire frontier with a single batched
//! catalog call, so the number of round trips to the gateway is bounded by
//! the depth of the group graph rather than its node count.

use ownership_resolver_repository::CatalogProvider;
use ownership_resolver_shared::{AuthContext, Entity, EntityRef, RelationType};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use crate::errors::OwnershipError;
use crate::relations::relation_refs;

/// Iterative breadth-first walker over the catalog's group graph.
///
/// Starting from a frontier of references, the walker repeatedly resolves
/// the frontier, keeps the group-kind entities not yet visited, and expands
/// the next frontier along one relation type. Non-group entities found
/// mid-walk are excluded from the result and never expanded. References the
/// catalog cannot resolve are silently dropped.
///
/// Termination is guaranteed on cyclic graphs: the visited set only grows
/// and the frontier only ever contains unvisited references, so with a
/// finite entity population the loop ends.
pub struct GroupClosureWalker {
    catalog: Arc<dyn CatalogProvider>,
}

impl GroupClosureWalker {
    /// Create a walker over the given catalog.
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { catalog }
    }

    /// Compute the set of group entities reachable from `seeds` by repeated
    /// expansion along `relation_type`.
    ///
    /// # Arguments
    ///
    /// * `seeds` - The initial frontier of candidate references
    /// * `relation_type` - The relation tag to expand along
    /// * `ctx` - Caller credentials passed through to the catalog
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Entity>)` - The reachable groups, each appearing once
    /// * `Err(OwnershipError)` - If any catalog lookup fails; no partial
    ///   result is returned
    pub async fn walk(
        &self,
        seeds: Vec<EntityRef>,
        relation_type: RelationType,
        ctx: &AuthContext,
    ) -> Result<Vec<Entity>, OwnershipError> {
        let mut visited: HashSet<EntityRef> = HashSet::new();
        let mut groups: Vec<Entity> = Vec::new();
        let mut frontier = seeds;

        while !frontier.is_empty() {
            let resolved = self.catalog.entities_by_refs(&frontier, ctx).await?;

            // Entities pushed this iteration start here; the next frontier
            // is expanded from them only.
            let newly_visited = groups.len();

            for entity in resolved {
                if !entity.is_group() {
                    continue;
                }
                if visited.insert(entity.entity_ref.clone()) {
                    groups.push(entity);
                }
            }

            debug!(
                relation_type = relation_type.as_str(),
                frontier = frontier.len(),
                visited = visited.len(),
                "Expanded closure frontier"
            );

            frontier = relation_refs(&groups[newly_visited..], relation_type)
                .into_iter()
                .filter(|r| !visited.contains(r))
                .collect();
        }

        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ownership_resolver_repository::CatalogError;
    use ownership_resolver_shared::Relation;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory catalog fixture recording each batch it is asked to
    /// resolve.
    struct FixtureCatalog {
        entities: HashMap<EntityRef, Entity>,
        calls: Mutex<Vec<Vec<EntityRef>>>,
        fail: bool,
    }

    impl FixtureCatalog {
        fn new(entities: Vec<Entity>) -> Self {
            Self {
                entities: entities
                    .into_iter()
                    .map(|e| (e.entity_ref.clone(), e))
                    .collect(),
                calls: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                entities: HashMap::new(),
                calls: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CatalogProvider for FixtureCatalog {
        async fn entities_by_refs(
            &self,
            refs: &[EntityRef],
            _ctx: &AuthContext,
        ) -> Result<Vec<Entity>, CatalogError> {
            if self.fail {
                return Err(CatalogError::connection("fixture offline"));
            }
            self.calls.lock().unwrap().push(refs.to_vec());
            Ok(refs
                .iter()
                .filter_map(|r| self.entities.get(r).cloned())
                .collect())
        }
    }

    fn group(name: &str, parents: &[&str]) -> Entity {
        Entity::new(format!("group:default/{}", name), "Group").with_relations(
            parents
                .iter()
                .map(|p| Relation::new("childOf", format!("group:default/{}", p)))
                .collect(),
        )
    }

    fn gref(name: &str) -> EntityRef {
        EntityRef::new(format!("group:default/{}", name))
    }

    async fn walk_ancestors(
        catalog: Arc<FixtureCatalog>,
        seeds: Vec<EntityRef>,
    ) -> Result<Vec<Entity>, OwnershipError> {
        let walker = GroupClosureWalker::new(catalog);
        walker
            .walk(seeds, RelationType::ChildOf, &AuthContext::anonymous())
            .await
    }

    #[tokio::test]
    async fn test_empty_seeds_do_not_call_catalog() {
        let catalog = Arc::new(FixtureCatalog::new(vec![]));
        let result = walk_ancestors(catalog.clone(), vec![]).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(catalog.call_count(), 0);
    }

    #[tokio::test]
    async fn test_linear_chain() {
        // team-a -> org -> root
        let catalog = Arc::new(FixtureCatalog::new(vec![
            group("team-a", &["org"]),
            group("org", &["root"]),
            group("root", &[]),
        ]));

        let result = walk_ancestors(catalog.clone(), vec![gref("team-a")])
            .await
            .unwrap();

        let refs: Vec<&EntityRef> = result.iter().map(|e| &e.entity_ref).collect();
        assert_eq!(refs, vec![&gref("team-a"), &gref("org"), &gref("root")]);
        // One batched call per depth level.
        assert_eq!(catalog.call_count(), 3);
    }

    #[tokio::test]
    async fn test_diamond_visits_each_group_once() {
        //   team-a   team-b
        //       \     /
        //        org
        let catalog = Arc::new(FixtureCatalog::new(vec![
            group("team-a", &["org"]),
            group("team-b", &["org"]),
            group("org", &[]),
        ]));

        let result = walk_ancestors(catalog, vec![gref("team-a"), gref("team-b")])
            .await
            .unwrap();
        assert_eq!(result.len(), 3);
    }

    #[tokio::test]
    async fn test_cycle_terminates() {
        // a -> b -> a
        let catalog = Arc::new(FixtureCatalog::new(vec![
            group("a", &["b"]),
            group("b", &["a"]),
        ]));

        let result = walk_ancestors(catalog, vec![gref("a")]).await.unwrap();
        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_non_group_entities_are_excluded() {
        // team-a has a malformed childOf edge pointing at a user.
        let user = Entity::new("user:default/alice", "User")
            .with_relations(vec![Relation::new("childOf", "group:default/org")]);
        let catalog = Arc::new(FixtureCatalog::new(vec![
            group("team-a", &[]).with_relations(vec![
                Relation::new("childOf", "user:default/alice"),
            ]),
            user,
            group("org", &[]),
        ]));

        let result = walk_ancestors(catalog, vec![gref("team-a")]).await.unwrap();

        // The user is dropped and never expanded, so org is unreachable.
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].entity_ref, gref("team-a"));
    }

    #[tokio::test]
    async fn test_missing_refs_are_silently_dropped() {
        let catalog = Arc::new(FixtureCatalog::new(vec![group("team-a", &["gone"])]));

        let result = walk_ancestors(catalog.clone(), vec![gref("team-a")])
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        // The dangling ref still costs one (empty) resolution round.
        assert_eq!(catalog.call_count(), 2);
    }

    #[tokio::test]
    async fn test_catalog_failure_propagates() {
        let catalog = Arc::new(FixtureCatalog::failing());
        let result = walk_ancestors(catalog, vec![gref("team-a")]).await;
        assert!(matches!(
            result,
            Err(OwnershipError::Catalog(CatalogError::ConnectionError(_)))
        ));
    }
}
