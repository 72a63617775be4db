//! Mapping from store outcomes to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced to HTTP clients. The body is the plain-text message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("user not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmptyName => ApiError::BadRequest(err.to_string()),
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::IdsExhausted => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_client_statuses() {
        let empty = ApiError::from(StoreError::EmptyName);
        assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
        assert_eq!(empty.to_string(), "name is required");

        let missing = ApiError::from(StoreError::NotFound(4));
        assert_eq!(missing, ApiError::NotFound);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn exhausted_ids_are_a_server_error() {
        let err = ApiError::from(StoreError::IdsExhausted);
        assert_eq!(err, ApiError::Internal("user ids exhausted".into()));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unencodable_json_body_is_a_server_error() {
        // JSON object keys must be strings.
        let body = std::collections::HashMap::from([((1, 2), 3)]);
        let resp = axum::Json(body).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn into_response_keeps_status() {
        let resp = ApiError::BadRequest("bad id".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
