//! Session handle shared by the transport and the auth service

use std::fmt;
use std::sync::Arc;

use atrium_domain::Result;
use tracing::{debug, warn};

use super::ports::CredentialStore;

/// Explicit, cloneable handle to the credential token
///
/// Clones share the same underlying store, so a token written through one
/// handle is visible through every other.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl Session {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Current token, if one is stored
    pub fn token(&self) -> Result<Option<String>> {
        self.store.load()
    }

    /// Token for the outbound `Authorization` header
    ///
    /// A store that cannot be read is treated as "no token" so unauthenticated
    /// calls still go out.
    pub fn bearer_token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token.filter(|value| !value.is_empty()),
            Err(err) => {
                warn!(error = %err, "credential store unreadable; sending request without token");
                None
            }
        }
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.store.store(token)?;
        debug!("credential token stored");
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.store.clear()?;
        debug!("credential token cleared");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer_token().is_some()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("authenticated", &self.is_authenticated()).finish()
    }
}
