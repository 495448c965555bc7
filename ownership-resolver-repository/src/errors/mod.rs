//! This module defines the error types for catalog lookups.

mod catalog;

pub use catalog::CatalogError;
