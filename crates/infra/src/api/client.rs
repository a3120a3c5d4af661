//! Transport client with request/response interceptors
//!
//! Single chokepoint for every call to the backing service:
//! - outbound: attach `Authorization: Bearer <token>` when the session has one
//! - inbound success: log, then unwrap the `{ data, .. }` envelope
//! - inbound failure: normalize; on 401 also clear the session and ask the
//!   navigator for the login screen before rejecting

use std::sync::Arc;
use std::time::Duration;

use atrium_core::{Navigator, Session};
use atrium_domain::{
    ApiConfig, ApiEnvelope, AtriumError, Result, BEARER_PREFIX, DEFAULT_API_BASE_URL,
    DEFAULT_API_TIMEOUT_MS,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::errors::{normalize, TransportFailure};
use crate::http::HttpClient;

/// Configuration for the transport client, fixed at construction
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL for the service (e.g., "https://bff.example.com/api")
    pub base_url: String,
    /// Timeout for each request
    pub timeout: Duration,
    /// Keep and replay cookies set by the service
    pub with_credentials: bool,
    /// Headers sent with every request, in addition to the JSON defaults
    pub default_headers: HeaderMap,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_API_TIMEOUT_MS),
            with_credentials: false,
            default_headers: HeaderMap::new(),
        }
    }
}

impl TransportConfig {
    /// Convert the serialisable API settings, validating extra headers.
    pub fn from_api_config(config: &ApiConfig) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                AtriumError::Config(format!("Invalid header name '{name}': {e}"))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                AtriumError::Config(format!("Invalid value for header '{name}': {e}"))
            })?;
            default_headers.insert(name, value);
        }

        Ok(Self {
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            with_credentials: config.with_credentials,
            default_headers,
        })
    }
}

/// HTTP client for the backing service
pub struct TransportClient {
    http: HttpClient,
    base_url: String,
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl TransportClient {
    /// Create a new transport client
    ///
    /// # Errors
    ///
    /// Returns `AtriumError::Config` if the underlying HTTP client cannot be
    /// built
    pub fn new(
        config: TransportConfig,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.extend(config.default_headers);

        let http = HttpClient::builder()
            .timeout(config.timeout)
            .cookie_store(config.with_credentials)
            .default_headers(headers)
            .user_agent(concat!("atrium/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
        })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> TransportClientBuilder {
        TransportClientBuilder::default()
    }

    /// The session whose token is attached to outbound requests
    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a GET request and unwrap the envelope
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(Method::GET, path, |request| request).await
    }

    /// Execute a GET request with query parameters
    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::GET, path, |request| request.query(query)).await
    }

    /// Execute a POST request with a JSON body
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::POST, path, |request| request.json(body)).await
    }

    /// Execute a PUT request with a JSON body
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::PUT, path, |request| request.json(body)).await
    }

    /// Execute a DELETE request
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(Method::DELETE, path, |request| request).await
    }

    /// Health check for the service
    ///
    /// `Ok(false)` when the service answers with a failure status. The body
    /// is not expected to follow the envelope contract.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<bool> {
        let url = self.url("/health");
        let request = self.http.request(Method::GET, &url);

        match self.http.send(request).await {
            Ok(response) if response.status().is_success() => {
                info!("service is healthy");
                Ok(true)
            }
            Ok(response) => {
                warn!(status = %response.status(), "service returned non-success status");
                Ok(false)
            }
            Err(err) => {
                warn!(error = %err, "health check failed");
                Err(AtriumError::Request(normalize(TransportFailure::Http(err))))
            }
        }
    }

    async fn execute<T, F>(&self, method: Method, path: &str, customize: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.url(path);
        let request = customize(self.authorize(self.http.request(method.clone(), &url)));

        let response = match self.http.send(request).await {
            Ok(response) => response,
            Err(err) => return Err(self.reject(TransportFailure::Http(err), &method, &url)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    warn!(%method, %url, %status, error = %err, "failed to read error response body");
                    String::new()
                }
            };
            let failure = TransportFailure::Status { status: status.as_u16(), body };
            return Err(self.reject(failure, &method, &url));
        }

        debug!(%method, %url, %status, "request succeeded");
        match Self::decode(status, response).await {
            Ok(data) => Ok(data),
            Err(failure) => Err(self.reject(failure, &method, &url)),
        }
    }

    /// Outbound interceptor: attach the bearer token when present
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.bearer_token() {
            Some(token) => request.header(AUTHORIZATION, format!("{BEARER_PREFIX}{token}")),
            None => request,
        }
    }

    /// Inbound failure interceptor
    fn reject(&self, failure: TransportFailure, method: &Method, url: &str) -> AtriumError {
        let category = failure.category();
        let error = normalize(failure);

        if error.status() == Some(StatusCode::UNAUTHORIZED.as_u16()) {
            info!(%method, %url, "credential rejected; clearing session");
            if let Err(err) = self.session.clear() {
                warn!(error = %err, "failed to clear credential after 401");
            }
            self.navigator.navigate_to_login();
            return AtriumError::Unauthenticated(error);
        }

        warn!(
            %method,
            %url,
            ?category,
            status = ?error.status(),
            message = %error.message(),
            "request failed"
        );
        AtriumError::Request(error)
    }

    /// Unwrap the envelope; 204/205 and empty bodies decode `T` from `null`.
    async fn decode<T: DeserializeOwned>(
        status: StatusCode,
        response: Response,
    ) -> std::result::Result<T, TransportFailure> {
        let code = status.as_u16();
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null)
                .map_err(|source| TransportFailure::Decode { status: code, source });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return serde_json::from_value(serde_json::Value::Null)
                .map_err(|source| TransportFailure::Decode { status: code, source });
        }

        serde_json::from_slice::<ApiEnvelope<T>>(&bytes)
            .map(ApiEnvelope::into_data)
            .map_err(|source| TransportFailure::Decode { status: code, source })
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Builder for the transport client
#[derive(Default)]
pub struct TransportClientBuilder {
    config: Option<TransportConfig>,
    session: Option<Session>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl TransportClientBuilder {
    /// Set the transport configuration
    pub fn config(mut self, config: TransportConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the session whose token is attached to requests
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the navigator invoked on authentication failure
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Build the transport client
    ///
    /// # Errors
    ///
    /// Returns error if the session or navigator is missing or client
    /// creation fails
    pub fn build(self) -> Result<TransportClient> {
        let config = self.config.unwrap_or_default();
        let session =
            self.session.ok_or_else(|| AtriumError::Config("Session not set".to_string()))?;
        let navigator =
            self.navigator.ok_or_else(|| AtriumError::Config("Navigator not set".to_string()))?;

        TransportClient::new(config, session, navigator)
    }
}
