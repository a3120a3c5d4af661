//! Domain types and models

pub mod auth;
pub mod envelope;
pub mod page;
pub mod user;

pub use auth::{LoginCredentials, LoginResponse};
pub use envelope::ApiEnvelope;
pub use page::Page;
pub use user::{NewUser, User, UserPatch, UserRole};
