use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use gatherly_core::ActionError;

/// HTTP-facing wrapper for the action error set.
#[derive(Debug)]
pub struct ApiError(pub ActionError);

impl From<ActionError> for ApiError {
    fn from(err: ActionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            ActionError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            ActionError::Forbidden(msg) => (StatusCode::FORBIDDEN, json!({ "error": msg })),
            ActionError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "validation failed", "violations": violations }),
            ),
            ActionError::Unhandled(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
