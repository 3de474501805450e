//! Client error types

use shared::{AppError, CartError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, TLS
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status; `message` is the server's text when it sent one
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// 2xx answer whose body is not what the endpoint promises
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// `success: false` inside a 2xx envelope
    #[error("{0}")]
    App(#[from] AppError),

    /// The cart refused the operation
    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("An order is already being saved")]
    SaveInProgress,
}

impl ClientError {
    /// Text to show the user
    ///
    /// Server messages are passed through verbatim; transport and decoding
    /// failures collapse into a generic notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } | Self::NotFound(message) | Self::Validation(message) => {
                message.clone()
            }
            Self::App(err) => err.message.clone(),
            Self::Cart(err) => err.to_string(),
            Self::SaveInProgress => self.to_string(),
            Self::Http(err) if err.is_timeout() => "The server took too long to answer".to_string(),
            Self::Http(_) => "Could not reach the server".to_string(),
            Self::InvalidResponse(_) | Self::Serialization(_) => {
                "The server sent an unexpected answer".to_string()
            }
        }
    }

    /// Error code in the shared numbering
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Http(err) if err.is_timeout() => ErrorCode::TimeoutError,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::Api { status, .. } => reqwest::StatusCode::from_u16(*status)
                .map(ErrorCode::from_http_status)
                .unwrap_or(ErrorCode::Unknown),
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::InvalidResponse(_) | Self::Serialization(_) => ErrorCode::InvalidFormat,
            Self::App(err) => err.code,
            Self::Cart(err) => err.code(),
            Self::SaveInProgress => ErrorCode::OrderSaveInProgress,
        }
    }

    /// Missing resource, whether the server or the local catalog said so
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::App(err) => matches!(
                err.code,
                ErrorCode::NotFound | ErrorCode::OrderNotFound | ErrorCode::ArticleNotFound
            ),
            _ => false,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
