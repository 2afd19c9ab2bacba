//! Error types for the alarm app.
//!
//! Every failure ends up as one generic alert in the UI. The variants exist so
//! that logs say what actually went wrong and tests can tell failures apart.

use std::path::PathBuf;
use thiserror::Error;

/// Failure talking to the account API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("Network request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Server returned {status}")]
    Status { status: reqwest::StatusCode },

    /// A 2xx response whose body could not be decoded.
    #[error("Unexpected response from server: {0}")]
    InvalidResponse(#[source] reqwest::Error),
}

impl ApiError {
    /// HTTP status if the server answered.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ApiError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// Failure reading or writing the stored user record.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored record at {path:?} is not valid: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A form field rejected by local validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Failure of the login flow (remote call plus local persistence).
#[derive(Error, Debug)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Text for the user-facing alert.
    ///
    /// Server rejections collapse to `fallback` ("Login failed"); other
    /// failures append a short hint so the user can tell a dead server from a
    /// wrong password.
    pub fn alert_message(&self, fallback: &str) -> String {
        match self {
            AuthError::Api(ApiError::Status { .. }) => fallback.to_string(),
            AuthError::Api(ApiError::Network(_)) => {
                format!("{}: could not reach the server", fallback)
            }
            AuthError::Api(ApiError::InvalidResponse(_)) => {
                format!("{}: unexpected server response", fallback)
            }
            AuthError::Storage(_) => format!("{}: could not save your session", fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_collapses_to_fallback() {
        let err = AuthError::from(ApiError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
        });
        assert_eq!(err.alert_message("Login failed"), "Login failed");
    }

    #[test]
    fn test_storage_error_message_mentions_session() {
        let err = AuthError::from(StorageError::Write {
            path: PathBuf::from("/tmp/user.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });
        let msg = err.alert_message("Login failed");
        assert!(msg.starts_with("Login failed"));
        assert!(msg.contains("session"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("group", "must be a number");
        assert_eq!(err.to_string(), "Invalid group: must be a number");
    }

    #[test]
    fn test_api_error_status_accessor() {
        let err = ApiError::Status {
            status: reqwest::StatusCode::BAD_REQUEST,
        };
        assert_eq!(err.status(), Some(reqwest::StatusCode::BAD_REQUEST));
    }
}
