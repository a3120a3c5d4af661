//! Application context - dependency injection container

use std::sync::Arc;

use atrium_core::{AuthService, CredentialStore, DataSourceKind, Session, UserDataSource};
use atrium_domain::{Config, Result};
use atrium_infra::{
    config, ChannelNavigator, FileCredentialStore, FixtureDataSource, MemoryCredentialStore,
    NetworkDataSource, TransportClient, TransportConfig,
};
use tracing::{debug, error, info};

use crate::logging::error_label;

/// Application context - holds the configured services
///
/// The data source is chosen once, here, from `data_source.use_mock`.
pub struct AppContext {
    pub config: Config,
    pub session: Session,
    pub navigator: Arc<ChannelNavigator>,
    pub data_source: Arc<dyn UserDataSource>,
    pub auth: Arc<AuthService>,
    /// Present only when talking to the live service
    pub transport: Option<Arc<TransportClient>>,
}

impl AppContext {
    /// Load `.env`, then configuration, then build the context
    ///
    /// # Errors
    /// Returns `AtriumError::Config` if no valid configuration is found.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env"),
            Err(e) => debug!(error = %e, "no .env file loaded"),
        }

        let config = config::load().map_err(|e| {
            error!(error = %e, kind = error_label(&e), "failed to load configuration");
            e
        })?;
        Self::new(config)
    }

    /// Build the context from an already loaded configuration
    ///
    /// The credential store is a JSON file when `storage.token_path` is set
    /// and process memory otherwise.
    ///
    /// # Errors
    /// Returns `AtriumError::Config` if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        let store: Arc<dyn CredentialStore> = match &config.storage.token_path {
            Some(path) => Arc::new(FileCredentialStore::new(path)),
            None => Arc::new(MemoryCredentialStore::new()),
        };
        Self::with_store(config, store)
    }

    /// Build the context around a caller-supplied credential store
    ///
    /// # Errors
    /// Returns `AtriumError::Config` if the configuration is invalid.
    pub fn with_store(config: Config, store: Arc<dyn CredentialStore>) -> Result<Self> {
        config::validate(&config)?;

        let session = Session::new(store);
        let navigator = Arc::new(ChannelNavigator::new());

        let mut transport = None;
        let data_source: Arc<dyn UserDataSource> = if config.data_source.use_mock {
            Arc::new(FixtureDataSource::new(config.data_source.mock_delay()))
        } else {
            let client = Arc::new(TransportClient::new(
                TransportConfig::from_api_config(&config.api)?,
                session.clone(),
                navigator.clone(),
            )?);
            transport = Some(client.clone());
            Arc::new(NetworkDataSource::new(client))
        };

        let auth =
            Arc::new(AuthService::new(data_source.clone(), session.clone(), navigator.clone()));

        info!(
            data_source = %data_source.kind(),
            base_url = %config.api.base_url,
            persistent_token = config.storage.token_path.is_some(),
            "application context initialized"
        );

        Ok(Self { config, session, navigator, data_source, auth, transport })
    }

    pub fn data_source_kind(&self) -> DataSourceKind {
        self.data_source.kind()
    }
}
