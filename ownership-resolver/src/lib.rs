//! # Ownership Resolver
//!
//! This crate computes the transitive group-ownership closure for an
//! identity: given the entity references a subject directly belongs to, it
//! walks the directed relation graph held by an external catalog service
//! and returns the deduplicated union of the initial entities, all ancestor
//! groups, and all descendant groups.
//!
//! The computation is read-only and stateless per invocation. The catalog
//! is reached through the injected [`CatalogProvider`] trait from the
//! repository crate.
//!
//! [`CatalogProvider`]: ownership_resolver_repository::CatalogProvider

pub mod config;
pub mod errors;
pub mod relations;
pub mod service;
pub mod walker;

pub use config::Dependencies;
pub use errors::OwnershipError;
pub use relations::relation_refs;
pub use service::OwnershipService;
pub use walker::GroupClosureWalker;
