//! This module defines and re-exports the interfaces for catalog access.
//! It serves as the central point for the provider trait the resolver is
//! written against.

mod catalog_provider;

pub use catalog_provider::CatalogProvider;
