//! Maps registry errors onto HTTP status codes.

use crate::parcel_actor::ParcelError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors returned by HTTP handlers, rendered as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Parcel(#[from] ParcelError),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Parcel(ParcelError::RouteNotFound { .. })
            | ApiError::Parcel(ParcelError::LegMismatch { .. })
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Parcel(ParcelError::ParcelNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Parcel(ParcelError::ActorCommunicationError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
