//! Data source backed by the live service

use std::sync::Arc;

use async_trait::async_trait;
use atrium_core::{DataSourceKind, UserDataSource};
use atrium_domain::{LoginCredentials, LoginResponse, NewUser, Page, Result, User, UserPatch};
use serde::de::IgnoredAny;
use serde_json::json;
use tracing::{debug, instrument};
use urlencoding::encode;

use crate::api::TransportClient;

/// Delegates every operation to the [`TransportClient`]
///
/// Not-found and validation failures come from the service; nothing is
/// checked locally.
pub struct NetworkDataSource {
    client: Arc<TransportClient>,
}

impl NetworkDataSource {
    pub fn new(client: Arc<TransportClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &TransportClient {
        &self.client
    }
}

#[async_trait]
impl UserDataSource for NetworkDataSource {
    fn kind(&self) -> DataSourceKind {
        DataSourceKind::Network
    }

    #[instrument(skip(self))]
    async fn current_user(&self) -> Result<User> {
        self.client.get("/users/me").await
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn user_by_id(&self, id: &str) -> Result<User> {
        let path = format!("/users/{}", encode(id));
        self.client.get(&path).await
    }

    #[instrument(skip(self))]
    async fn list_users(&self, page: u32, size: u32) -> Result<Page<User>> {
        let result: Page<User> =
            self.client.get_with_query("/users", &[("page", page), ("size", size)]).await?;

        debug!(
            returned = result.content.len(),
            total = result.total_elements,
            "users listed"
        );
        Ok(result)
    }

    #[instrument(skip_all)]
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse> {
        let response: LoginResponse = self.client.post("/auth/login", credentials).await?;

        debug!(user_id = %response.user.id, "login accepted by service");
        Ok(response)
    }

    #[instrument(skip(self))]
    async fn logout(&self) -> Result<()> {
        let _: IgnoredAny = self.client.post("/auth/logout", &json!({})).await?;
        Ok(())
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let created: User = self.client.post("/users", user).await?;

        debug!(user_id = %created.id, "user created");
        Ok(created)
    }

    #[instrument(skip(self, patch), fields(user_id = %id))]
    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User> {
        let path = format!("/users/{}", encode(id));
        self.client.put(&path, patch).await
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn delete_user(&self, id: &str) -> Result<()> {
        let path = format!("/users/{}", encode(id));
        let _: IgnoredAny = self.client.delete(&path).await?;

        debug!("user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use atrium_core::Session;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::TransportConfig;
    use crate::navigation::NoopNavigator;
    use crate::storage::MemoryCredentialStore;

    fn user_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "email": format!("user{id}@example.com"),
            "name": format!("User {id}"),
            "role": "user",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        })
    }

    fn source_for(server: &MockServer, token: Option<&str>) -> NetworkDataSource {
        let store = match token {
            Some(token) => MemoryCredentialStore::with_token(token),
            None => MemoryCredentialStore::new(),
        };
        let client = TransportClient::new(
            TransportConfig { base_url: server.uri(), ..Default::default() },
            Session::new(Arc::new(store)),
            Arc::new(NoopNavigator),
        )
        .unwrap();
        NetworkDataSource::new(Arc::new(client))
    }

    #[tokio::test]
    async fn current_user_sends_token_and_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": user_json("1"),
                "message": "ok",
                "timestamp": "2024-01-01T00:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = source_for(&server, Some("tok-1")).current_user().await.unwrap();
        assert_eq!(user.id, "1");
    }

    #[tokio::test]
    async fn ids_are_path_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/a%2Fb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": user_json("a/b") })))
            .expect(1)
            .mount(&server)
            .await;

        let user = source_for(&server, None).user_by_id("a/b").await.unwrap();
        assert_eq!(user.id, "a/b");
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/does-not-exist"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "message": "User not found" })),
            )
            .mount(&server)
            .await;

        let err = source_for(&server, None).user_by_id("does-not-exist").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "User not found");
    }

    #[tokio::test]
    async fn list_passes_paging_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "1"))
            .and(query_param("size", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "content": [user_json("3")],
                    "totalElements": 3,
                    "totalPages": 2,
                    "size": 2,
                    "number": 1
                }
            })))
            .mount(&server)
            .await;

        let page = source_for(&server, None).list_users(1, 2).await.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.total_pages, 2);
        assert!(page.is_last());
    }

    #[tokio::test]
    async fn login_posts_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({ "email": "a@b.com", "password": "x" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "user": user_json("1"), "token": "jwt-1" }
            })))
            .mount(&server)
            .await;

        let response = source_for(&server, None)
            .login(&LoginCredentials::new("a@b.com", "x"))
            .await
            .unwrap();
        assert_eq!(response.token, "jwt-1");
    }

    #[tokio::test]
    async fn update_puts_only_present_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/users/1"))
            .and(body_json(json!({ "name": "Renamed" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": user_json("1") })))
            .expect(1)
            .mount(&server)
            .await;

        let patch = UserPatch { name: Some("Renamed".into()), ..Default::default() };
        source_for(&server, None).update_user("1", &patch).await.unwrap();
    }

    #[tokio::test]
    async fn logout_and_delete_accept_empty_or_enveloped_bodies() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/logout"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "ok": true } })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/users/2"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let source = source_for(&server, None);
        source.logout().await.unwrap();
        source.delete_user("2").await.unwrap();
        assert_eq!(source.kind(), DataSourceKind::Network);
    }
}
