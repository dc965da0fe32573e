use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Any violation of the meal invariants. Deliberately carries no cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("meal validation failed")]
pub struct ValidationFailure;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_failure"),
        };
        (status, Json(ErrorBody { error: code })).into_response()
    }
}
