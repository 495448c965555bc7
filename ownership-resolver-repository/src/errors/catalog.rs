//! Catalog error types.
//!
//! This module defines the unified error type for catalog lookups. Every
//! variant is fatal to the invocation that hit it: the resolver performs no
//! retries, so callers decide whether to retry, degrade, or surface the
//! failure.

use thiserror::Error;

/// Unified errors from catalog lookups.
///
/// Used by the `CatalogProvider` trait for all lookup operations. A missing
/// entity is not an error and never produces a variant here; the provider
/// contract omits unresolvable references from its result instead.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Failed to reach the catalog service.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The catalog service answered with a non-success status.
    #[error("Gateway error: status {status}: {message}")]
    GatewayError { status: u16, message: String },

    /// Failed to decode a response from the catalog service.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize a request for the catalog service.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Invalid provider configuration (e.g. an unparseable base URL).
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CatalogError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a gateway error from a response status and message.
    pub fn gateway(status: u16, msg: impl Into<String>) -> Self {
        Self::GatewayError {
            status,
            message: msg.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
