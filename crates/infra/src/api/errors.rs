//! Failure normalization for the transport client
//!
//! Every failed call is turned into one [`RequestError`] whose message is
//! picked, in order, from the server's `message` field, the server's `error`
//! field, the raw transport message, or a generic fallback.

use atrium_domain::{RequestError, FALLBACK_ERROR_MESSAGE};
use serde_json::Value;
use thiserror::Error;

/// Categories of transport failures, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// 401 - credential rejected
    Authentication,
    /// 404
    NotFound,
    /// Other 4xx
    Client,
    /// 5xx
    Server,
    /// No response: connection, DNS, TLS
    Network,
    /// No response within the configured timeout
    Timeout,
    /// 2xx with a body that does not match the envelope contract
    Decode,
    /// Anything else (request construction and the like)
    Other,
}

/// The underlying failure a [`RequestError`] is normalized from
#[derive(Debug, Error)]
pub enum TransportFailure {
    /// No usable response was received
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The server answered with a failure status
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    /// The server answered 2xx but the body could not be decoded
    #[error("failed to decode response body: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl TransportFailure {
    /// HTTP status, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(err) => err.status().map(|status| status.as_u16()),
            Self::Status { status, .. } | Self::Decode { status, .. } => Some(*status),
        }
    }

    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Http(err) if err.is_timeout() => ApiErrorCategory::Timeout,
            Self::Http(err) if err.is_builder() => ApiErrorCategory::Other,
            Self::Http(_) => ApiErrorCategory::Network,
            Self::Status { status: 401, .. } => ApiErrorCategory::Authentication,
            Self::Status { status: 404, .. } => ApiErrorCategory::NotFound,
            Self::Status { status, .. } if *status >= 500 => ApiErrorCategory::Server,
            Self::Status { .. } => ApiErrorCategory::Client,
            Self::Decode { .. } => ApiErrorCategory::Decode,
        }
    }

    /// Body the server sent with a failure status, if any
    fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Build the normalized error for a failed call, keeping `failure` as the
/// original cause.
pub fn normalize(failure: TransportFailure) -> RequestError {
    let status = failure.status();
    let message = resolve_message(failure.body(), failure.to_string());
    RequestError::new(message, status, failure)
}

/// Server body first, then the transport's own text unless it is blank.
fn resolve_message(body: Option<&str>, raw: String) -> String {
    if let Some(message) = body.and_then(server_message) {
        return message;
    }

    if raw.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        raw
    }
}

/// `message`, then `error`, from a JSON error body. Empty strings and
/// non-string values are skipped.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str).filter(|text| !text.is_empty()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    fn status(status: u16, body: &str) -> TransportFailure {
        TransportFailure::Status { status, body: body.to_string() }
    }

    #[test]
    fn server_message_field_wins() {
        let err = normalize(status(400, r#"{ "message": "Email is taken", "error": "Conflict" }"#));
        assert_eq!(err.message(), "Email is taken");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn error_field_used_when_message_missing() {
        let err = normalize(status(403, r#"{ "error": "Forbidden" }"#));
        assert_eq!(err.message(), "Forbidden");
    }

    #[test]
    fn empty_or_non_string_fields_are_skipped() {
        let err = normalize(status(422, r#"{ "message": "", "error": "Unprocessable" }"#));
        assert_eq!(err.message(), "Unprocessable");

        let err = normalize(status(422, r#"{ "message": { "code": 7 } }"#));
        assert_eq!(err.message(), "Request failed with status code 422");
    }

    #[test]
    fn transport_message_used_when_body_is_not_json() {
        let err = normalize(status(502, "<html>Bad Gateway</html>"));
        assert_eq!(err.message(), "Request failed with status code 502");
    }

    #[test]
    fn fallback_used_when_nothing_else_is_available() {
        assert_eq!(resolve_message(None, String::new()), FALLBACK_ERROR_MESSAGE);
        assert_eq!(resolve_message(Some("<html></html>"), "  ".to_string()), FALLBACK_ERROR_MESSAGE);
        assert_eq!(
            resolve_message(Some(r#"{ "message": "Busy" }"#), String::new()),
            "Busy"
        );
    }

    #[test]
    fn original_failure_is_kept_as_source() {
        let err = normalize(status(500, r#"{ "message": "Database down" }"#));
        let source = err.source().expect("original failure");
        assert_eq!(source.to_string(), "Request failed with status code 500");
    }

    #[test]
    fn categories_follow_status() {
        assert_eq!(status(401, "").category(), ApiErrorCategory::Authentication);
        assert_eq!(status(404, "").category(), ApiErrorCategory::NotFound);
        assert_eq!(status(409, "").category(), ApiErrorCategory::Client);
        assert_eq!(status(503, "").category(), ApiErrorCategory::Server);
    }

    #[test]
    fn decode_failures_keep_status() {
        let source = serde_json::from_str::<Value>("{").unwrap_err();
        let err = normalize(TransportFailure::Decode { status: 200, source });
        assert_eq!(err.status(), Some(200));
        assert!(err.message().starts_with("failed to decode response body"));
    }
}
