//! User data access

pub mod ports;
