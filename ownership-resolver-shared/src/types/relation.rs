//! Relation types for the catalog entity graph.
//!
//! Relations are typed directed edges stored on the source entity's record.
//! The catalog may carry many relation kinds; the resolver only traverses
//! the two group-hierarchy directions, but must tolerate any tag on the
//! wire.

use crate::types::EntityRef;
use serde::{Deserialize, Serialize};

/// The directed relation tags the resolver traverses along.
///
/// `ChildOf` points from a group to its parent; `ParentOf` points from a
/// group to its child. The two are conceptual inverses but are stored as
/// separate directed edges, and both directions may or may not be present
/// symmetrically. Traversal must not assume symmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationType {
    /// Edge from a group to its parent group.
    ChildOf,
    /// Edge from a group to its child group.
    ParentOf,
}

impl RelationType {
    /// The wire tag used for this relation type on entity records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChildOf => "childOf",
            Self::ParentOf => "parentOf",
        }
    }
}

/// A typed directed edge from the owning entity to `target_ref`.
///
/// Duplicates are possible on a record and must be tolerated; order carries
/// no meaning. The relation tag is kept as a plain string so records
/// carrying tags outside [`RelationType`] (e.g. `memberOf`, `ownerOf`)
/// decode without error and are simply ignored by traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    /// The relation tag, e.g. `childOf`.
    #[serde(rename = "type")]
    pub relation_type: String,
    /// The entity this edge points to.
    pub target_ref: EntityRef,
}

impl Relation {
    /// Create a new relation with the given tag and target.
    pub fn new(relation_type: impl Into<String>, target_ref: impl Into<EntityRef>) -> Self {
        Self {
            relation_type: relation_type.into(),
            target_ref: target_ref.into(),
        }
    }

    /// Check whether this relation carries the given traversal tag.
    pub fn is_type(&self, relation_type: RelationType) -> bool {
        self.relation_type == relation_type.as_str()
    }
}
