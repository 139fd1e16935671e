use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Standard error body for all failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// Every failure a handler can produce, with its client-visible status.
///
/// Each error is terminal for the current request; handlers never retry.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid book id: {0:?}")]
    InvalidId(String),

    #[error("malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("book {0} not found")]
    NotFound(i32),

    #[error("store unavailable")]
    StoreUnavailable(#[source] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            StoreError::Unavailable(source) => ApiError::StoreUnavailable(source),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidId(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        if status.is_server_error() {
            log::error!("request failed with {}: {:?}", status, self);
        }

        (status, Json(ErrorResponse::new(&self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_maps_to_bad_request() {
        let response = ApiError::InvalidId("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound(7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_unavailable_maps_to_503() {
        let err = StoreError::Unavailable(anyhow::anyhow!("connection refused"));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn store_not_found_converts_to_api_not_found() {
        match ApiError::from(StoreError::NotFound(3)) {
            ApiError::NotFound(id) => assert_eq!(id, 3),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
