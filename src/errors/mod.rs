//! Error handling for the seating admin client.
//!
//! Every failure is non-fatal: errors convert into transient user
//! notifications, except authentication expiry which signals a redirect to
//! the login screen.

use serde::{Deserialize, Serialize};

/// Fallback message shown when the backend provides none.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Client error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The backend answered 401; the session is no longer valid.
    AuthExpired,
    /// Non-2xx response with whatever message the backend supplied.
    Api { status: u16, message: String },
    /// Transport-level failure (connection refused, timeout, ...).
    Network(String),
    /// Response body did not match the expected shape.
    Decode(String),
    /// Local form validation failure; never sent to the network.
    Validation(String),
}

impl ClientError {
    /// True when the caller should redirect to the login flow instead of
    /// showing a generic error toast.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ClientError::AuthExpired)
    }

    /// The human-readable text a notification would carry.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::AuthExpired => {
                "Authentication failed. Please log in again.".to_string()
            }
            ClientError::Api { message, .. } => {
                if message.is_empty() {
                    GENERIC_ERROR_MESSAGE.to_string()
                } else {
                    message.clone()
                }
            }
            ClientError::Network(_) => {
                "Server connection failed. Please try again later.".to_string()
            }
            ClientError::Decode(_) => GENERIC_ERROR_MESSAGE.to_string(),
            ClientError::Validation(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::AuthExpired => write!(f, "authentication expired"),
            ClientError::Api { status, message } => write!(f, "api error {status}: {message}"),
            ClientError::Network(msg) => write!(f, "network error: {msg}"),
            ClientError::Decode(msg) => write!(f, "decode error: {msg}"),
            ClientError::Validation(msg) => write!(f, "validation error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            tracing::error!("Response decode error: {:?}", err);
            ClientError::Decode(err.to_string())
        } else {
            tracing::error!("Network error: {:?}", err);
            ClientError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ClientError::Decode(err.to_string())
    }
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A transient toast/snackbar message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn from_error(err: &ClientError) -> Self {
        Self::error(err.user_message())
    }
}
