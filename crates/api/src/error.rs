use apiresponder_core::error::CoreError;
use apiresponder_core::{messages, Envelope};
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::response::JsonResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] through the same envelope as successful
/// responses, so clients parse one shape.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `apiresponder_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request body axum could not extract as JSON.
    #[error(transparent)]
    Json(#[from] JsonRejection),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::InvalidInput(errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let envelope = match self {
            AppError::Core(CoreError::Internal(msg)) | AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                Envelope::internal_error()
            }
            AppError::Core(core) => Envelope::from(core),
            AppError::Json(rejection) => json_rejection_envelope(&rejection),
            AppError::BadRequest(msg) => Envelope::bad_request().with_message(msg),
        };

        JsonResponse(envelope).into_response()
    }
}

/// Well-formed JSON with missing or mistyped fields is a validation failure;
/// anything else (syntax, content type) is a bad request.
fn json_rejection_envelope(rejection: &JsonRejection) -> Envelope {
    tracing::debug!(error = %rejection, "Rejected request body");
    match rejection {
        JsonRejection::JsonDataError(_) => Envelope::validation_failed()
            .with_message(messages::ALL_FIELDS_REQUIRED)
            .with_errors(Value::from(vec![rejection.body_text()])),
        _ => Envelope::bad_request().with_message(rejection.body_text()),
    }
}
