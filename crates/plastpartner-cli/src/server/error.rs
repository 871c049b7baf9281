//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use plastpartner::PlastError;
use serde::Serialize;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or blank company header.
    Unauthorized(String),
    /// Error from the plastpartner library.
    Plast(PlastError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
            ApiError::Plast(e) => match e {
                PlastError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
                PlastError::Parse { .. }
                | PlastError::Csv(_)
                | PlastError::EmptyData(_)
                | PlastError::NotAnArray
                | PlastError::InvalidRecord { .. }
                | PlastError::InvalidTenant(_)
                | PlastError::InvalidMeasure(_)
                | PlastError::Json(_) => (StatusCode::BAD_REQUEST, "bad_request"),
                PlastError::Io { .. }
                | PlastError::BaseYearNotFound(_)
                | PlastError::Persistence(_)
                | PlastError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let message = match self {
            ApiError::Unauthorized(msg) => msg,
            ApiError::Plast(e) => e.to_string(),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<PlastError> for ApiError {
    fn from(err: PlastError) -> Self {
        ApiError::Plast(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::Plast(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::Plast(PlastError::NotFound("measure 3".into())), StatusCode::NOT_FOUND),
            (ApiError::Plast(PlastError::NotAnArray), StatusCode::BAD_REQUEST),
            (
                ApiError::Plast(PlastError::Persistence("disk full".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ApiError::Unauthorized("no company".into()), StatusCode::UNAUTHORIZED),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_client_errors_come_from_library() {
        let err = ApiError::from(PlastError::InvalidMeasure("summary is empty".into()));
        assert_eq!(err.status(), (StatusCode::BAD_REQUEST, "bad_request"));
        assert_eq!(err.to_string(), PlastError::InvalidMeasure("summary is empty".into()).to_string());
    }
}
