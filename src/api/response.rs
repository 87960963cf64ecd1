//! Success envelope shared by every endpoint.

use axum::Json;
use serde::Serialize;

/// `{"success": true, "data": ..., "message": "..."}`; `data` is left out
/// when there is nothing to return.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            message: message.into(),
        })
    }
}

impl ApiResponse<()> {
    /// Envelope without a payload, e.g. after a delete.
    pub fn message(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data: None,
            message: message.into(),
        })
    }
}
