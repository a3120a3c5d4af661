//! # Atrium Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The HTTP transport with bearer injection and failure normalization
//! - Network and fixture data sources
//! - Credential stores (memory, JSON file)
//! - Navigator adapters
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `atrium-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod data_sources;
pub mod errors;
pub mod http;
pub mod navigation;
pub mod storage;

// Re-export commonly used items
pub use api::{TransportClient, TransportConfig};
pub use data_sources::{FixtureDataSource, NetworkDataSource};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use navigation::{ChannelNavigator, NavigationEvent, NoopNavigator};
pub use storage::{FileCredentialStore, MemoryCredentialStore};
