use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::warn;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            ApiError::ClientError(message) => {
                warn!(task = "client error", reason = message.as_str());
                (StatusCode::BAD_REQUEST, message)
            }
        };

        (status_code, Json(json!({ "message": message }))).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;
