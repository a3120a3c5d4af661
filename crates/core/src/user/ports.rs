//! Port interfaces for user data access
//!
//! Every domain operation runs through a [`UserDataSource`]. Two adapters
//! exist in `atrium-infra`: one backed by the live service and one backed by
//! in-memory fixtures. The choice is made once, when the application context
//! is built, and callers only ever see the trait.

use std::fmt;

use async_trait::async_trait;
use atrium_domain::{LoginCredentials, LoginResponse, NewUser, Page, Result, User, UserPatch};

/// Which adapter is serving requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSourceKind {
    /// Live calls through the transport client
    Network,
    /// Canned records with simulated latency
    Fixture,
}

impl fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => f.write_str("network"),
            Self::Fixture => f.write_str("fixture"),
        }
    }
}

/// Strategy for user and session operations against the backing service
#[async_trait]
pub trait UserDataSource: Send + Sync {
    /// Adapter identity, for diagnostics
    fn kind(&self) -> DataSourceKind;

    /// The authenticated user
    async fn current_user(&self) -> Result<User>;

    /// Look up one user; fails with a not-found error when no record matches
    async fn user_by_id(&self, id: &str) -> Result<User>;

    /// One page of the user list (`page` is zero-based)
    async fn list_users(&self, page: u32, size: u32) -> Result<Page<User>>;

    /// Exchange credentials for a user and bearer token
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse>;

    /// End the server-side session, if any
    async fn logout(&self) -> Result<()>;

    /// Create a user
    async fn create_user(&self, user: &NewUser) -> Result<User>;

    /// Merge `patch` onto an existing user and return the result
    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User>;

    /// Remove a user
    async fn delete_user(&self, id: &str) -> Result<()>;
}
