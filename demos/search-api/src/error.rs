use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn bad_gateway(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<scryfall_sorter::SorterError> for AppError {
    fn from(e: scryfall_sorter::SorterError) -> Self {
        use scryfall_sorter::SorterError;
        match &e {
            SorterError::InvalidArgument(msg) => AppError::bad_request(msg.clone()),
            SorterError::Http(_) | SorterError::Json(_) | SorterError::Api { .. } => {
                AppError::bad_gateway(e.to_string())
            }
            SorterError::Io(_) => AppError::internal(e.to_string()),
        }
    }
}
