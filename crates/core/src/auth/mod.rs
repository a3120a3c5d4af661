//! Authentication: credential storage, session handle, navigation hook and
//! the login/logout workflow.

pub mod ports;
pub mod service;
pub mod session;

pub use ports::{CredentialStore, Navigator};
pub use service::AuthService;
pub use session::Session;
