//! Application error type

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable message, shown to the user as-is
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Create an error from a failed API call
    ///
    /// The server's message is kept verbatim; when the server sent none a
    /// generic notice derived from the status is used instead.
    pub fn from_api(status: StatusCode, message: Option<String>) -> Self {
        let code = ErrorCode::from_http_status(status);
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| match status.canonical_reason() {
                Some(reason) => format!("Request failed: {}", reason),
                None => format!("Request failed with status {}", status.as_u16()),
            });
        Self::with_message(code, message).with_detail("status", status.as_u16())
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
