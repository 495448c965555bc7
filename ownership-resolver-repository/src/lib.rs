//! # Ownership Resolver Repository
//!
//! This crate provides the trait and implementations for resolving catalog
//! entities by reference. It includes definitions for errors, the provider
//! interface, a concrete HTTP implementation against the catalog's batch
//! lookup endpoint, and its configuration.

pub mod config;
pub mod errors;
pub mod http;
pub mod interfaces;

pub use config::CatalogConfig;
pub use errors::CatalogError;
pub use http::HttpCatalogProvider;
pub use interfaces::CatalogProvider;
