use serde_json::Value;
use validator::ValidationErrors;

use crate::envelope::Envelope;
use crate::messages;

/// Domain-level failures that handlers report to clients.
///
/// Each variant renders as the matching response envelope via
/// `From<CoreError> for Envelope`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Validation failed: {0}")]
    InvalidInput(#[from] ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CoreError> for Envelope {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { entity, id } => Envelope::not_found()
                .with_errors(Value::from(format!("{entity} with id {id} not found"))),
            CoreError::Validation(msg) => {
                Envelope::validation_failed().with_errors(Value::from(vec![msg]))
            }
            CoreError::InvalidInput(errors) => {
                let errors = serde_json::to_value(&errors)
                    .unwrap_or_else(|_| Value::from(vec![messages::ALL_FIELDS_REQUIRED]));
                Envelope::validation_failed().with_errors(errors)
            }
            CoreError::Conflict(msg) => Envelope::failure().with_message(msg),
            CoreError::Unauthorized(msg) => Envelope::unauthorized().with_message(msg),
            CoreError::Forbidden(msg) => Envelope::forbidden().with_message(msg),
            CoreError::BadRequest(msg) => Envelope::bad_request().with_message(msg),
            CoreError::RateLimited(msg) => Envelope::too_many_requests().with_message(msg),
            // Details stay server-side.
            CoreError::Internal(_) => Envelope::internal_error(),
        }
    }
}
