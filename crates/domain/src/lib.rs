//! # Atrium Domain
//!
//! Business domain types and models for the Atrium client.
//!
//! This crate contains:
//! - User records, credentials and the login payload
//! - Wire contracts (response envelope, paged result)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Atrium crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use constants::*;
pub use errors::*;
pub use types::*;
