use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    InvalidPostId,
    MalformedBody,
    NotFound,
    MethodNotAllowed,
    BodyRead(String),
}

/// Convert our custom errors to HTTP responses
///
/// Every error is answered with a short plain-text message; only successful
/// responses carry JSON.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidPostId => (StatusCode::BAD_REQUEST, "Invalid post ID"),
            ApiError::MalformedBody => (StatusCode::BAD_REQUEST, "Error parsing request body"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Post not found"),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            ApiError::BodyRead(msg) => {
                error!("Failed to read request body: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error reading request body",
                )
            }
        };

        (status, message).into_response()
    }
}
