use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// This error type provides consistent error handling across all endpoints,
/// automatically mapping different error types to appropriate HTTP status codes
/// and formatting them as JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// No route table entry for this method and path
    RouteNotFound { method: Method, path: String },
    /// Request body was not valid JSON
    JsonError(serde_json::Error),
    /// The route matched but a capture the handler relies on is absent.
    /// Unreachable through the shipped table; kept as an explicit guard.
    MissingPathParam(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::RouteNotFound { method, path } => (
                StatusCode::NOT_FOUND,
                format!("No route matches {} {}", method, path),
            ),
            ApiError::JsonError(err) => (
                StatusCode::BAD_REQUEST,
                format!("JSON parse error: {}", err),
            ),
            ApiError::MissingPathParam(name) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Route matched without capturing '{}'", name),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}
