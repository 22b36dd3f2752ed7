use std::path::PathBuf;

use thiserror::Error;
use uva_api_common::ErrorCategory;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to load credentials from {path}: {reason}")]
    Credentials { path: PathBuf, reason: String },

    #[error("Failed to connect to {host}: {source}")]
    Connection {
        host: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {host} timed out")]
    Timeout {
        host: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Authentication failed ({status}): {body}")]
    AuthenticationFailed { status: u16, body: String },

    #[error("Malformed token response: {0}")]
    MalformedTokenResponse(String),

    #[error("Failed to serialize request: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Wraps a transport error, keeping the host that could not be reached.
    pub(crate) fn transport(host: impl Into<String>, source: reqwest::Error) -> Self {
        let host = host.into();
        if source.is_timeout() {
            ClientError::Timeout { host, source }
        } else {
            ClientError::Connection { host, source }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Config(_) | ClientError::Credentials { .. } => ErrorCategory::Config,
            ClientError::Connection { .. } => ErrorCategory::Connection,
            ClientError::Timeout { .. } => ErrorCategory::Timeout,
            ClientError::AuthenticationFailed { .. } | ClientError::MalformedTokenResponse(_) => {
                ErrorCategory::Authentication
            }
            ClientError::Serialization(_) => ErrorCategory::Internal,
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            ClientError::Config(_) => {
                Some("Check --token-url and --gateway-url (or UVA_API_TOKEN_URL / UVA_API_GATEWAY_URL).".to_string())
            }
            ClientError::Credentials { .. } => Some(
                "The credentials file must be a JSON object mapping each client to {\"client_id\", \"client_secret\"}."
                    .to_string(),
            ),
            ClientError::Connection { .. } => {
                Some("Check your network connection and the configured endpoint URLs.".to_string())
            }
            ClientError::Timeout { .. } => {
                Some("The server did not answer in time. Raise --timeout or retry later.".to_string())
            }
            ClientError::AuthenticationFailed { .. } => Some(
                "Verify the client name and its UVA_API_<CLIENT>_CLIENT_ID / UVA_API_<CLIENT>_CLIENT_SECRET."
                    .to_string(),
            ),
            ClientError::MalformedTokenResponse(_) => {
                Some("The identity provider returned no access token. Check the token endpoint URL.".to_string())
            }
            ClientError::Serialization(_) => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClientError::Connection { .. } | ClientError::Timeout { .. }
        )
    }
}
