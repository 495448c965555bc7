//! HTTP catalog provider implementation.

mod provider;

pub use provider::HttpCatalogProvider;
