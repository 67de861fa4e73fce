//! Engine error → HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lk_core::EngineError;
use serde_json::json;

/// Wrapper giving [`EngineError`] an HTTP shape. Every engine outcome maps
/// to a fixed status code and a `{"error": {"code", "message"}}` body.
#[derive(Debug)]
pub struct ApiError(pub EngineError);

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            EngineError::NotFound(_, _) => StatusCode::NOT_FOUND,
            EngineError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            EngineError::Conflict(_) => StatusCode::CONFLICT,
            EngineError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn code(&self) -> &'static str {
        match self.0 {
            EngineError::NotFound(_, _) => "not_found",
            EngineError::InvalidInput(_) => "invalid_input",
            EngineError::Conflict(_) => "conflict",
            EngineError::Unavailable(_) => "unavailable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            tracing::error!(error = %self.0, "engine unavailable");
        }
        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.0.to_string(),
            }
        }));
        (status, body).into_response()
    }
}
