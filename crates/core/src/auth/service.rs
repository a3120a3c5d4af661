//! Login / logout workflow - core business logic

use std::sync::Arc;

use atrium_domain::{AtriumError, LoginCredentials, LoginResponse, Result, User};
use tracing::{info, instrument, warn};

use super::ports::Navigator;
use super::session::Session;
use crate::user::ports::UserDataSource;

/// Authentication service
///
/// Owns the token lifecycle: written on login, removed on logout. The 401
/// path is handled by the transport, which shares the same [`Session`].
pub struct AuthService {
    source: Arc<dyn UserDataSource>,
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(
        source: Arc<dyn UserDataSource>,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self { source, session, navigator }
    }

    /// Log in and persist the returned token
    ///
    /// Incomplete credentials are rejected before any I/O.
    #[instrument(skip_all, fields(source = %self.source.kind()))]
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse> {
        if !credentials.is_complete() {
            warn!("login rejected: email or password missing");
            return Err(AtriumError::InvalidCredentials);
        }

        let response = self.source.login(credentials).await?;
        self.session.set_token(&response.token)?;

        info!(user_id = %response.user.id, "login succeeded");
        Ok(response)
    }

    /// Log out
    ///
    /// The local token is cleared and the login screen requested even when
    /// the data source call fails; that failure is still returned.
    #[instrument(skip_all, fields(source = %self.source.kind()))]
    pub async fn logout(&self) -> Result<()> {
        let outcome = self.source.logout().await;
        if let Err(err) = &outcome {
            warn!(error = %err, "remote logout failed; clearing local session anyway");
        }

        self.session.clear()?;
        self.navigator.navigate_to_login();

        info!("logged out");
        outcome
    }

    /// The authenticated user
    pub async fn current_user(&self) -> Result<User> {
        self.source.current_user().await
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }
}
