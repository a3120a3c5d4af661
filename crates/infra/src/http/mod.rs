//! Low-level HTTP plumbing over `reqwest`

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
