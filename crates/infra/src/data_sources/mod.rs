//! User data source implementations
//!
//! Both implement [`atrium_core::UserDataSource`]; the embedding application
//! picks one at construction and never switches per call.

pub mod fixture;
pub mod network;

pub use fixture::FixtureDataSource;
pub use network::NetworkDataSource;
