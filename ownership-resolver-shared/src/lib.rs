//! # Ownership Resolver Shared
//!
//! This crate defines shared data structures and types used across the
//! ownership resolver workspace. It includes common definitions for catalog
//! entities, entity references, typed relations, and caller credentials.

pub mod types;

pub use types::{AuthContext, Entity, EntityRef, Relation, RelationType, GROUP_KIND};
