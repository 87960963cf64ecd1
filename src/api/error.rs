//! Error handling at the HTTP boundary.
//!
//! Every failure is answered with `{"detail": "..."}` and the matching status:
//!
//! | Variant | Status |
//! |---------|--------|
//! | `Validation`, `Conflict`, `Referential` | 400 |
//! | `NotFound` | 404 |
//! | `Internal` | 500 (detail is not exposed) |

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::order_actor::OrderError;
use crate::produce_actor::ProduceError;
use crate::vendor_actor::VendorError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A referenced record (vendor, produce) does not exist.
    #[error("Missing reference: {0}")]
    Referential(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) | ApiError::Conflict(_) | ApiError::Referential(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::Internal(msg) => {
                error!(error = %msg, "Internal error occurred");
                "Internal server error".to_string()
            }
            ApiError::Validation(msg)
            | ApiError::Conflict(msg)
            | ApiError::NotFound(msg)
            | ApiError::Referential(msg) => msg,
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

// ========== Entity errors ==========

impl From<VendorError> for ApiError {
    fn from(e: VendorError) -> Self {
        match e {
            VendorError::NotFound(_) => ApiError::NotFound("Vendor not found".into()),
            VendorError::PhoneTaken(_) => {
                ApiError::Conflict("Vendor with this phone number already exists.".into())
            }
            VendorError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<ProduceError> for ApiError {
    fn from(e: ProduceError) -> Self {
        match e {
            ProduceError::NotFound(_) => ApiError::NotFound("Produce not found".into()),
            ProduceError::VendorMissing(_) => ApiError::Referential("Vendor does not exist.".into()),
            e @ (ProduceError::InsufficientStock { .. }
            | ProduceError::Unavailable(_)
            | ProduceError::TotalOutOfRange { .. }) => ApiError::Validation(e.to_string()),
            ProduceError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => ApiError::NotFound("Order not found".into()),
            OrderError::ProduceMissing(_) => {
                ApiError::Referential("Produce does not exist.".into())
            }
            OrderError::InsufficientStock(reason) | OrderError::TotalOutOfRange(reason) => {
                ApiError::Validation(reason)
            }
            e @ OrderError::InvalidTransition { .. } => ApiError::Validation(e.to_string()),
            OrderError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

// ========== Extractor rejections ==========

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}
