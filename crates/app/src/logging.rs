//! Tracing subscriber setup

use atrium_domain::AtriumError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install the global `fmt` subscriber, filtered by `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset or invalid. Safe to call
/// more than once; returns `false` when a subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}

/// Convert an `AtriumError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &AtriumError) -> &'static str {
    match error {
        AtriumError::Config(_) => "config",
        AtriumError::Request(_) => "request",
        AtriumError::Unauthenticated(_) => "unauthenticated",
        AtriumError::NotFound(_) => "not_found",
        AtriumError::InvalidCredentials => "invalid_credentials",
        AtriumError::InvalidInput(_) => "invalid_input",
        AtriumError::Storage(_) => "storage",
        AtriumError::Internal(_) => "internal",
    }
}
