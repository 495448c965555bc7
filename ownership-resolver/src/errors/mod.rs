//! Error types for the ownership resolver.
//!
//! All catalog failures are fatal to the invocation that hit them: there is
//! no partial-result recovery, and the caller decides whether to retry,
//! degrade, or surface the failure.

use ownership_resolver_repository::CatalogError;

/// Errors that can occur while resolving ownership.
#[derive(Debug, thiserror::Error)]
pub enum OwnershipError {
    /// The catalog lookup gateway failed; propagated unmodified.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
