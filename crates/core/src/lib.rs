//! # Atrium Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for data sources, credential storage
//!   and navigation
//! - The session handle and the login/logout service
//!
//! ## Architecture Principles
//! - Only depends on `atrium-domain`
//! - No HTTP, filesystem or UI code
//! - All external dependencies via traits

pub mod auth;
pub mod user;

pub use auth::{AuthService, CredentialStore, Navigator, Session};
pub use user::ports::{DataSourceKind, UserDataSource};
