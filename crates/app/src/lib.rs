//! # Atrium App
//!
//! Composition root: reads configuration once, selects the data source and
//! wires the transport, session, navigator and auth service together.

pub mod context;
pub mod logging;

pub use context::AppContext;
pub use logging::init_tracing;
