//! Conversions from external infrastructure errors into domain errors.
//!
//! Transport failures of actual calls do not go through here: those are
//! normalized by `api::errors` so the original failure survives. This module
//! covers setup and local I/O (client construction, credential files,
//! configuration files).

use std::io::{Error as IoError, ErrorKind};

use atrium_domain::AtriumError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub AtriumError);

impl From<InfraError> for AtriumError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<AtriumError> for InfraError {
    fn from(value: AtriumError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoAtriumError {
    fn into_atrium(self) -> AtriumError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → AtriumError */
/* -------------------------------------------------------------------------- */

impl IntoAtriumError for IoError {
    fn into_atrium(self) -> AtriumError {
        match self.kind() {
            ErrorKind::NotFound => AtriumError::Storage(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                AtriumError::Storage(format!("permission denied: {self}"))
            }
            _ => AtriumError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        Self(value.into_atrium())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → AtriumError */
/* -------------------------------------------------------------------------- */

impl IntoAtriumError for JsonError {
    fn into_atrium(self) -> AtriumError {
        if self.is_io() {
            AtriumError::Storage(format!("failed to read JSON: {self}"))
        } else {
            AtriumError::Storage(format!(
                "malformed JSON at line {} column {}: {self}",
                self.line(),
                self.column()
            ))
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        Self(value.into_atrium())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → AtriumError */
/* -------------------------------------------------------------------------- */

impl IntoAtriumError for TomlError {
    fn into_atrium(self) -> AtriumError {
        AtriumError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        Self(value.into_atrium())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → AtriumError */
/* -------------------------------------------------------------------------- */

impl IntoAtriumError for HttpError {
    fn into_atrium(self) -> AtriumError {
        if self.is_builder() {
            return AtriumError::Config(format!("invalid HTTP client configuration: {self}"));
        }
        AtriumError::Internal(format!("HTTP client error: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_atrium())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
