//! This module defines the core data structures and types used across the
//! ownership resolver. It re-exports the entity, reference, relation, and
//! credential types.

pub mod auth;
pub mod entity;
pub mod entity_ref;
pub mod relation;

pub use auth::AuthContext;
pub use entity::{Entity, GROUP_KIND};
pub use entity_ref::EntityRef;
pub use relation::{Relation, RelationType};
