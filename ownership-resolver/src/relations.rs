//! Relation extraction.
//!
//! Pure helper mapping entity records and a relation-type filter to the
//! deduplicated list of target references.

use ownership_resolver_shared::{Entity, EntityRef, RelationType};
use std::collections::HashSet;

/// Extract the deduplicated target references of all relations carrying
/// `relation_type` across the given entities.
///
/// Entities with no relations contribute nothing; duplicate edges are
/// collapsed. Output order follows first-seen order but carries no meaning.
pub fn relation_refs<'a, I>(entities: I, relation_type: RelationType) -> Vec<EntityRef>
where
    I: IntoIterator<Item = &'a Entity>,
{
    let mut seen: HashSet<&EntityRef> = HashSet::new();
    let mut refs = Vec::new();

    for entity in entities {
        for relation in &entity.relations {
            if relation.is_type(relation_type) && seen.insert(&relation.target_ref) {
                refs.push(relation.target_ref.clone());
            }
        }
    }

    refs
}

#[cfg(test)]
mod tests {
    use super::*;
    use ownership_resolver_shared::Relation;

    fn group(name: &str, relations: Vec<Relation>) -> Entity {
        Entity::new(format!("group:default/{}", name), "Group").with_relations(relations)
    }

    #[test]
    fn test_filters_by_relation_type() {
        let entity = group(
            "team-a",
            vec![
                Relation::new("childOf", "group:default/org"),
                Relation::new("parentOf", "group:default/squad"),
                Relation::new("memberOf", "group:default/ignored"),
            ],
        );

        let parents = relation_refs([&entity], RelationType::ChildOf);
        assert_eq!(parents, vec![EntityRef::new("group:default/org")]);

        let children = relation_refs([&entity], RelationType::ParentOf);
        assert_eq!(children, vec![EntityRef::new("group:default/squad")]);
    }

    #[test]
    fn test_dedup_across_entities() {
        let a = group("team-a", vec![Relation::new("childOf", "group:default/org")]);
        let b = group(
            "team-b",
            vec![
                Relation::new("childOf", "group:default/org"),
                Relation::new("childOf", "group:default/org"),
            ],
        );

        let refs = relation_refs(vec![&a, &b], RelationType::ChildOf);
        assert_eq!(refs, vec![EntityRef::new("group:default/org")]);
    }

    #[test]
    fn test_no_relations_is_not_an_error() {
        let entity = group("leaf", vec![]);
        let refs = relation_refs([&entity], RelationType::ParentOf);
        assert!(refs.is_empty());
    }
}
