use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use triage_wizard::error::WizardError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// A store read or write failed; surfaced with the operation context so
    /// the operator can retry the same action manually.
    Upstream(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Upstream(msg) => {
                tracing::error!("store operation failed: {msg}");
                (StatusCode::BAD_GATEWAY, msg)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<WizardError> for ApiError {
    fn from(e: WizardError) -> Self {
        ApiError::Upstream(e.to_string())
    }
}
