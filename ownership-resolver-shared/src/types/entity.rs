//! Catalog entity record type.
//!
//! This module defines the entity shape the resolver consumes from the
//! catalog: a reference, a kind discriminator, and the typed relations
//! stored on the record.

use crate::types::{EntityRef, Relation};
use serde::{Deserialize, Serialize};

/// Kind discriminator for group entities.
///
/// Only entities of this kind are expanded during closure traversal.
/// Comparison is exact.
pub const GROUP_KIND: &str = "Group";

/// A catalog entity record as returned by the lookup gateway.
///
/// All entity data is read-only and externally owned; the resolver never
/// creates, mutates, or deletes records. It only computes derived,
/// ephemeral result sets per invocation.
///
/// # Fields
///
/// - `entity_ref`: the unique reference the catalog knows this entity by
/// - `kind`: string discriminator (e.g. "Group", "User", "Component")
/// - `relations`: typed directed edges to other entities; may be absent on
///   the wire, in which case it decodes to an empty list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub entity_ref: EntityRef,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<Relation>,
}

impl Entity {
    /// Create a new entity record with no relations.
    pub fn new(entity_ref: impl Into<EntityRef>, kind: impl Into<String>) -> Self {
        Self {
            entity_ref: entity_ref.into(),
            kind: kind.into(),
            relations: Vec::new(),
        }
    }

    /// Attach relations to this record.
    pub fn with_relations(mut self, relations: Vec<Relation>) -> Self {
        self.relations = relations;
        self
    }

    /// Check whether this entity is a group.
    pub fn is_group(&self) -> bool {
        self.kind == GROUP_KIND
    }
}
