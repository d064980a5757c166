//! Error types for the gateway layer.

use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Fallback text shown when an error carries no message.
pub const GENERIC_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Errors that can occur while talking to the remote content API.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// URL or token absent; no request was attempted.
    #[error("Strapi API configuration is missing")]
    ConfigurationMissing,

    /// A response did not have the expected JSON shape.
    #[error("unexpected API response format: {0}")]
    RemoteShapeInvalid(String),

    /// The transport failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse failure categories surfaced to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    ConfigurationMissing,
    RemoteShapeInvalid,
    NetworkOrHttpFailure,
}

impl GatewayError {
    /// Classifies the error into one of the operator-facing categories.
    pub fn kind(&self) -> FailureKind {
        match self {
            GatewayError::ConfigurationMissing => FailureKind::ConfigurationMissing,
            GatewayError::RemoteShapeInvalid(_) | GatewayError::Serialization(_) => {
                FailureKind::RemoteShapeInvalid
            }
            GatewayError::Network(_)
            | GatewayError::Http { .. }
            | GatewayError::InvalidRequest(_) => FailureKind::NetworkOrHttpFailure,
        }
    }

    /// Text for the inline error callout.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::RemoteShapeInvalid(msg)
            | GatewayError::Network(msg)
            | GatewayError::InvalidRequest(msg)
                if msg.trim().is_empty() =>
            {
                GENERIC_ERROR_MESSAGE.to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl From<strapi_mesh_types::Error> for GatewayError {
    fn from(err: strapi_mesh_types::Error) -> Self {
        match err {
            strapi_mesh_types::Error::Serialization(e) => GatewayError::Serialization(e),
            other => GatewayError::RemoteShapeInvalid(other.to_string()),
        }
    }
}
