//! Error types used throughout the client

use std::error::Error as StdError;

use thiserror::Error;

/// Underlying failure carried by a [`RequestError`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Normalized failure of a call to the backing service.
///
/// Every failed transport call surfaces in this one shape regardless of
/// whether the network, a timeout, or the server was at fault. The original
/// failure stays reachable through [`StdError::source`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
    status: Option<u16>,
    #[source]
    original: BoxError,
}

impl RequestError {
    /// Build a normalized error from a message, optional HTTP status and the
    /// failure it was derived from.
    pub fn new(
        message: impl Into<String>,
        status: Option<u16>,
        original: impl Into<BoxError>,
    ) -> Self {
        Self { message: message.into(), status, original: original.into() }
    }

    /// Message suitable for rendering to the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status, when a response was received.
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// The failure this error was normalized from.
    pub fn original(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.original.as_ref()
    }
}

/// Main error type for Atrium
#[derive(Error, Debug)]
pub enum AtriumError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport or server failure.
    #[error(transparent)]
    Request(RequestError),

    /// The server rejected the credential (HTTP 401). The stored token has
    /// already been cleared when this is returned.
    #[error(transparent)]
    Unauthenticated(RequestError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AtriumError {
    /// HTTP status of the underlying response, if any.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request(err) | Self::Unauthenticated(err) => err.status(),
            _ => None,
        }
    }

    /// True for local lookups that missed and for 404 responses.
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Request(err) => matches!(err.status(), Some(404)),
            _ => false,
        }
    }

    /// True when the call failed because the credential was rejected.
    pub const fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated(_))
    }

    /// The normalized request failure, for transport-originated errors.
    pub const fn request_error(&self) -> Option<&RequestError> {
        match self {
            Self::Request(err) | Self::Unauthenticated(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RequestError> for AtriumError {
    fn from(value: RequestError) -> Self {
        if value.status() == Some(401) {
            Self::Unauthenticated(value)
        } else {
            Self::Request(value)
        }
    }
}

/// Result type alias for Atrium operations
pub type Result<T> = std::result::Result<T, AtriumError>;

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn request_error_displays_message_and_keeps_source() {
        let original = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        let err = RequestError::new("Service unavailable", Some(503), original);

        assert_eq!(err.to_string(), "Service unavailable");
        assert_eq!(err.status(), Some(503));
        let source = err.source().expect("source is preserved");
        assert_eq!(source.to_string(), "connection refused");
    }

    #[test]
    fn request_error_accepts_string_original() {
        let err = RequestError::new("boom", None, "socket closed");
        assert_eq!(err.original().to_string(), "socket closed");
        assert!(err.status().is_none());
    }

    #[test]
    fn not_found_covers_local_misses_and_404_responses() {
        assert!(AtriumError::NotFound("user 42".into()).is_not_found());

        let missing = AtriumError::from(RequestError::new("User not found", Some(404), "404"));
        assert!(missing.is_not_found());
        assert_eq!(missing.status(), Some(404));

        let server = AtriumError::from(RequestError::new("oops", Some(500), "500"));
        assert!(!server.is_not_found());
        assert!(!AtriumError::InvalidCredentials.is_not_found());
    }

    #[test]
    fn status_401_converts_to_unauthenticated() {
        let err = AtriumError::from(RequestError::new("Token expired", Some(401), "401"));
        assert!(err.is_unauthenticated());
        assert_eq!(err.to_string(), "Token expired");
        assert!(err.request_error().is_some());
    }

    #[test]
    fn transparent_variants_render_normalized_message() {
        let err = AtriumError::from(RequestError::new("Email already taken", Some(409), "409"));
        assert_eq!(err.to_string(), "Email already taken");
        assert!(!err.is_unauthenticated());
    }
}
