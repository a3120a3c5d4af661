//! Credential token storage
//!
//! Implementations of [`atrium_core::CredentialStore`]:
//! - [`MemoryCredentialStore`]: process-local, for tests and short-lived tools
//! - [`FileCredentialStore`]: JSON key/value file that survives restarts

pub mod file;
pub mod memory;

pub use file::FileCredentialStore;
pub use memory::MemoryCredentialStore;
