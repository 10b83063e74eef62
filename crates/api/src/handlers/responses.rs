//! Handlers that render each response envelope kind on demand.
//!
//! Lets API clients see every envelope shape the server can produce,
//! e.g. to generate fixtures or check their error parsing.

use apiresponder_core::{Envelope, Outcome};
use axum::extract::{Path, Query, State};
use axum::http::Uri;
use serde::Deserialize;
use serde_json::Value;

use crate::responder::ApiResponder;
use crate::response::JsonResponse;
use crate::state::AppState;

/// Optional `?message=` override.
#[derive(Debug, Deserialize)]
pub struct MessageParams {
    pub message: Option<String>,
}

/// GET /api/v1/responses/{kind}
///
/// Render the envelope for `kind` (an outcome slug such as `not-found`).
/// `success-with` puts the kind itself under a `kind` key.
pub async fn show_response(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<MessageParams>,
) -> JsonResponse {
    let outcome = match kind.parse::<Outcome>() {
        Ok(outcome) => outcome,
        Err(err) => return state.not_found(err.to_string(), Some(Value::from(kind))),
    };
    let message = params
        .message
        .unwrap_or_else(|| outcome.default_message().to_string());

    match outcome {
        Outcome::Success => state.success(message, None::<Value>),
        Outcome::SuccessWith => state.success_with(message, "kind", Value::from(kind)),
        Outcome::Failure => state.failure(message, None::<Value>),
        Outcome::ValidationFailed => state.validation_failed(message, None::<Value>),
        Outcome::NotFound => state.not_found(message, None::<Value>),
        Outcome::Unauthorized => state.unauthorized(message),
        Outcome::Forbidden => state.forbidden(message),
        Outcome::BadRequest => state.bad_request(message),
        Outcome::RequestTimeout => JsonResponse(Envelope::request_timeout().with_message(message)),
        Outcome::TooManyRequests => state.too_many_requests(message),
        Outcome::InternalError => JsonResponse(Envelope::internal_error().with_message(message)),
    }
}

/// Any unmatched route.
pub async fn fallback(State(state): State<AppState>, uri: Uri) -> JsonResponse {
    state.not_found(
        Outcome::NotFound.default_message(),
        Some(Value::from(format!("No route for {}", uri.path()))),
    )
}
