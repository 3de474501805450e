//! API response envelope
//!
//! The restaurant API answers mutations and aggregate reads with
//! ```json
//! { "success": true, "message": "Pedido guardado correctamente.", "data": { ... } }
//! ```
//! List endpoints return bare JSON arrays and do not use this envelope.

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};

/// Generic `{success, message, data}` envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Human-readable message, meant to be shown to the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    // `serde(default)` would require `T: Default`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, turning `success: false` or a missing payload
    /// into an [`AppError`]
    pub fn into_result(self) -> Result<T, AppError> {
        if !self.success {
            return Err(AppError::with_message(
                ErrorCode::Unknown,
                self.message
                    .unwrap_or_else(|| ErrorCode::Unknown.message().to_string()),
            ));
        }
        self.data.ok_or_else(|| {
            AppError::with_message(ErrorCode::InvalidFormat, "Response is missing its data")
        })
    }
}

/// `{success, message}` answer of the create/update/delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ActionResponse {
    /// Synthesized answer for `204 No Content`
    pub fn no_content() -> Self {
        Self {
            success: true,
            message: "Operación exitosa.".to_string(),
        }
    }

    /// Turn `success: false` into an [`AppError`] carrying the server message
    pub fn into_result(self) -> Result<String, AppError> {
        if self.success {
            Ok(self.message)
        } else {
            Err(AppError::with_message(ErrorCode::Unknown, self.message))
        }
    }
}
