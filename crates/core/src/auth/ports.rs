//! Port interfaces for authentication state
//!
//! These traits define the boundaries between the session logic and the
//! storage / UI integrations supplied by the embedding application.

use atrium_domain::Result;

/// Persistent storage for the credential token
///
/// Implementations hold at most one token. `clear` on an empty store is not
/// an error.
pub trait CredentialStore: Send + Sync {
    /// Read the stored token, if any
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored token
    fn store(&self, token: &str) -> Result<()>;

    /// Remove the stored token
    fn clear(&self) -> Result<()>;
}

/// Caller-side navigation policy
///
/// The transport invokes this after an authentication failure; the auth
/// service invokes it after logout. What "navigate" means is up to the UI.
pub trait Navigator: Send + Sync {
    /// Send the user to the login screen
    fn navigate_to_login(&self);
}
