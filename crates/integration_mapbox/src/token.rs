//! Access token storage
//!
//! A [`TokenStore`] is a cheaply cloneable handle to one shared token slot.
//! Clients hold a handle, so setting the token once through any handle makes
//! it visible to every client created from the same store.

use std::sync::Arc;

use parking_lot::RwLock;
use secrecy::SecretString;

/// Shared holder for the Mapbox access token
#[derive(Clone, Default)]
pub struct TokenStore {
    token: Arc<RwLock<Option<SecretString>>>,
}

impl TokenStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set_token(token);
        store
    }

    /// Store a token, replacing any previous one
    ///
    /// The value is not validated; an empty string is stored like any other.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(SecretString::from(token.into()));
    }

    /// The current token, or `None` if it has never been set
    #[must_use]
    pub fn get_token(&self) -> Option<SecretString> {
        self.token.read().clone()
    }

    /// Whether a token has been set
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.token.read().is_some()
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field(
                "token",
                &if self.is_set() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .finish()
    }
}
