// SPDX-License-Identifier: Apache-2.0

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use noteful_api::{ApiError, ErrorEnvelope};
use noteful_store::StoreError;
use tracing::error;

/// Everything a handler can fail with. Each variant is terminal for the
/// request.
#[derive(Debug)]
pub(crate) enum AppError {
    Validation(ApiError),
    NotFound(ApiError),
    BadRequest(ApiError),
    PayloadTooLarge(ApiError),
    Store(StoreError),
}

/// Store failure text, attached to 500 responses so the error boundary can
/// decide whether to expose it.
#[derive(Debug, Clone)]
pub(crate) struct StoreErrorDetail(pub String);

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let err = ApiError::new(rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(err)
        } else {
            Self::BadRequest(err)
        }
    }
}

pub(crate) fn api_error_response(status: StatusCode, err: ApiError) -> Response {
    (status, Json(ErrorEnvelope::from(err))).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) | Self::BadRequest(err) => {
                api_error_response(StatusCode::BAD_REQUEST, err)
            }
            Self::NotFound(err) => api_error_response(StatusCode::NOT_FOUND, err),
            Self::PayloadTooLarge(err) => api_error_response(StatusCode::PAYLOAD_TOO_LARGE, err),
            Self::Store(err) => {
                error!(error = %err, "store operation failed");
                let mut resp =
                    api_error_response(StatusCode::INTERNAL_SERVER_ERROR, ApiError::server_error());
                resp.extensions_mut()
                    .insert(StoreErrorDetail(err.to_string()));
                resp
            }
        }
    }
}
