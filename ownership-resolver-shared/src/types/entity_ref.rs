//! Entity reference type.
//!
//! An entity reference is the opaque key under which the catalog knows an
//! entity. By convention it is a `kind:namespace/name` token, but the
//! resolver never inspects its structure. It is only compared, hashed, and
//! passed back to the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique identifier for a catalog entity.
///
/// Used as a map and set key throughout the resolver. The inner token is
/// treated as a single unit; no parsing of its components is performed.
///
/// # Example
///
/// ```
/// use ownership_resolver_shared::EntityRef;
///
/// let entity_ref = EntityRef::new("group:default/team-a");
/// assert_eq!(entity_ref.as_str(), "group:default/team-a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRef(String);

impl EntityRef {
    /// Create a new entity reference from a token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the reference token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityRef {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for EntityRef {
    fn from(token: String) -> Self {
        Self(token)
    }
}
