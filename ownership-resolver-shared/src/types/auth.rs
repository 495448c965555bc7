//! Caller credential context.
//!
//! Credentials are supplied by the caller per invocation and passed through
//! to the lookup gateway unmodified. The resolver never mints, refreshes,
//! or inspects them.

use std::fmt;

/// Opaque authorization context for catalog lookups.
///
/// Carries an optional bearer token. The token is redacted from `Debug`
/// output so contexts can appear in tracing fields without leaking
/// credentials.
#[derive(Clone, Default)]
pub struct AuthContext {
    token: Option<String>,
}

impl AuthContext {
    /// Create an anonymous context with no credentials.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Create a context carrying a bearer token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Get the bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field(
                "token",
                &self.token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_has_no_token() {
        assert!(AuthContext::anonymous().token().is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let ctx = AuthContext::bearer("secret-token");
        let rendered = format!("{:?}", ctx);
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
