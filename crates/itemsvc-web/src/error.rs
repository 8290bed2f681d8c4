//! API error type with HTTP status mapping.
//!
//! Every failure a handler can produce is an [`ApiError`]. It renders as
//! `{"error": "<message>"}` with the status from [`ApiError::status`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use itemsvc_store::StoreError;

use crate::response::{ApiBody, Reply};

/// Client-visible failure of an item operation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The `id` query parameter is absent or empty.
    #[error("Missing item ID")]
    MissingId,

    /// The `id` query parameter is not an integer.
    #[error("Invalid item ID")]
    InvalidId,

    /// The request body could not be decoded into `{name, value}`.
    #[error("Invalid request payload")]
    InvalidPayload(#[source] serde_json::Error),

    /// The body decoded but a field violates a rule.
    #[error("{0}")]
    Validation(String),

    /// No item with the requested `id`.
    #[error("Item not found")]
    NotFound,

    /// The path exists but does not support the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The store failed. The message is surfaced as-is.
    #[error("{0}")]
    Store(StoreError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingId | Self::InvalidId | Self::InvalidPayload(_) | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => Self::NotFound,
            StoreError::InvalidArgument(reason) => Self::Validation(reason),
            other => Self::Store(other),
        }
    }
}

impl From<ApiError> for Reply {
    fn from(e: ApiError) -> Self {
        if let ApiError::Store(inner) = &e {
            tracing::error!(error = %inner, "store operation failed");
        }
        Reply::new(e.status(), ApiBody::Error { error: e.to_string() })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Reply::from(self).into_response()
    }
}
