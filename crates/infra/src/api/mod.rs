//! Transport to the backing service
//!
//! Every network call goes through [`TransportClient`], which attaches the
//! bearer credential, unwraps the response envelope and normalizes failures
//! into [`atrium_domain::RequestError`].
//!
//! # Architecture
//!
//! - Uses the shared [`crate::http::HttpClient`] (no direct reqwest clients)
//! - Timeout on every call, no automatic retries
//! - 401 clears the session and routes to login through the injected navigator

pub mod client;
pub mod errors;

pub use client::{TransportClient, TransportClientBuilder, TransportConfig};
pub use errors::{normalize, ApiErrorCategory, TransportFailure};
