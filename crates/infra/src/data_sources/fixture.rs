//! In-memory data source with simulated latency
//!
//! Every operation waits the configured delay before touching the fixture
//! list so callers exercise the same loading paths as with the live service.
//! Mutations are kept: an update or delete is visible to later reads.

use std::time::Duration;

use async_trait::async_trait;
use atrium_core::{DataSourceKind, UserDataSource};
use atrium_domain::{
    AtriumError, LoginCredentials, LoginResponse, NewUser, Page, Result, User, UserPatch,
    UserRole, DEFAULT_MOCK_DELAY_MS, MOCK_TOKEN,
};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Serves users from an in-memory list
pub struct FixtureDataSource {
    users: RwLock<Vec<User>>,
    /// Signed-in user, resolved against `users` on every call
    current_id: Option<String>,
    delay: Duration,
}

impl FixtureDataSource {
    /// Seeded with [`default_users`]
    pub fn new(delay: Duration) -> Self {
        Self::with_users(default_users(), delay)
    }

    /// Seeded with `users`. The first one acts as the signed-in user.
    pub fn with_users(users: Vec<User>, delay: Duration) -> Self {
        let current_id = users.first().map(|user| user.id.clone());
        Self { users: RwLock::new(users), current_id, delay }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Snapshot of the fixture list
    pub fn users(&self) -> Vec<User> {
        self.users.read().clone()
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn not_found(id: &str) -> AtriumError {
        AtriumError::NotFound(format!("User {id} not found"))
    }

    fn find(&self, id: &str) -> Result<User> {
        self.users
            .read()
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    /// Latest record of the signed-in user; gone once that user is deleted
    fn signed_in(&self) -> Result<User> {
        match &self.current_id {
            Some(id) => self.find(id),
            None => Err(AtriumError::NotFound("No signed-in user".to_string())),
        }
    }
}

impl Default for FixtureDataSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_MOCK_DELAY_MS))
    }
}

#[async_trait]
impl UserDataSource for FixtureDataSource {
    fn kind(&self) -> DataSourceKind {
        DataSourceKind::Fixture
    }

    async fn current_user(&self) -> Result<User> {
        self.simulate_latency().await;
        self.signed_in()
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn user_by_id(&self, id: &str) -> Result<User> {
        self.simulate_latency().await;
        self.find(id)
    }

    async fn list_users(&self, page: u32, size: u32) -> Result<Page<User>> {
        self.simulate_latency().await;
        let users = self.users.read();
        Ok(Page::from_slice(&users, page, size))
    }

    #[instrument(skip_all)]
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse> {
        self.simulate_latency().await;
        if !credentials.is_complete() {
            warn!("fixture login rejected: email or password missing");
            return Err(AtriumError::InvalidCredentials);
        }

        Ok(LoginResponse { user: self.signed_in()?, token: MOCK_TOKEN.to_string() })
    }

    async fn logout(&self) -> Result<()> {
        self.simulate_latency().await;
        Ok(())
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn create_user(&self, user: &NewUser) -> Result<User> {
        self.simulate_latency().await;
        if user.email.trim().is_empty() || user.name.trim().is_empty() {
            return Err(AtriumError::InvalidInput("email and name are required".to_string()));
        }

        let mut users = self.users.write();
        if users.iter().any(|existing| existing.email.eq_ignore_ascii_case(&user.email)) {
            return Err(AtriumError::InvalidInput(format!("Email {} already exists", user.email)));
        }

        let now = Utc::now();
        let created = User {
            id: Uuid::new_v4().to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            avatar: None,
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());

        debug!(user_id = %created.id, "fixture user created");
        Ok(created)
    }

    #[instrument(skip(self, patch), fields(user_id = %id))]
    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User> {
        self.simulate_latency().await;
        let mut users = self.users.write();
        let user = users.iter_mut().find(|user| user.id == id).ok_or_else(|| Self::not_found(id))?;
        user.apply_patch(patch, Utc::now());
        Ok(user.clone())
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn delete_user(&self, id: &str) -> Result<()> {
        self.simulate_latency().await;
        let mut users = self.users.write();
        let before = users.len();
        users.retain(|user| user.id != id);
        if users.len() == before {
            return Err(Self::not_found(id));
        }

        debug!("fixture user deleted");
        Ok(())
    }
}

/// The three seed users: an admin (the signed-in user), a regular user and a
/// viewer
pub fn default_users() -> Vec<User> {
    vec![
        fixture_user("1", "admin@example.com", "Admin User", UserRole::Admin),
        fixture_user("2", "user@example.com", "Regular User", UserRole::User),
        fixture_user("3", "viewer@example.com", "Viewer User", UserRole::Viewer),
    ]
}

fn fixture_user(id: &str, email: &str, name: &str, role: UserRole) -> User {
    // 2024-01-01T00:00:00Z
    let created = DateTime::<Utc>::from_timestamp(1_704_067_200, 0).unwrap_or_default();
    User {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role,
        avatar: None,
        created_at: created,
        updated_at: created,
    }
}
