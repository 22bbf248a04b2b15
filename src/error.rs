use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

// Error taxonomy for both endpoints. The Display text is what server-side
// logs see; clients only ever get the safe message from client_message().
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("no such route")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    // upstream completion call failed; detail stays in the logs
    #[error("upstream failure: {0}")]
    Upstream(String),

    // naming mode: model output was not the expected JSON array
    #[error("unparseable model output: {0}")]
    UpstreamParse(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::UpstreamParse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Validation messages are written for end users and shown verbatim;
    // everything else collapses to a generic message.
    fn client_message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::RateLimited => "Too many requests. Please wait a moment.".to_string(),
            ApiError::NotFound => "Not found.".to_string(),
            ApiError::MethodNotAllowed => "Method not allowed.".to_string(),
            ApiError::Upstream(_) => "AI service unavailable.".to_string(),
            ApiError::UpstreamParse(_) => "Failed to parse names.".to_string(),
            ApiError::Internal(_) => "Internal server error.".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Upstream(_) | ApiError::UpstreamParse(_) | ApiError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
            }
            _ => {}
        }

        let body = Json(json!({ "error": self.client_message() }));
        (self.status(), body).into_response()
    }
}
