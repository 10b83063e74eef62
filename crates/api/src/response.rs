//! HTTP binding for the response envelope.
//!
//! All API responses use the `{ "status", "message", ... }` envelope from
//! `apiresponder_core`. Return [`JsonResponse`] from handlers instead of
//! `(StatusCode, Json(...))` so the HTTP status and the body's `status`
//! field always agree.

use apiresponder_core::{Envelope, Outcome};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

/// An [`Envelope`] sent as `application/json` with the envelope's status code.
///
/// # Example
///
/// ```ignore
/// async fn show() -> JsonResponse {
///     Envelope::success().with_message("OK").into()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonResponse<D = Value, E = Value>(pub Envelope<D, E>);

impl<D, E> JsonResponse<D, E> {
    pub fn envelope(&self) -> &Envelope<D, E> {
        &self.0
    }

    pub fn into_envelope(self) -> Envelope<D, E> {
        self.0
    }
}

impl<D, E> From<Envelope<D, E>> for JsonResponse<D, E> {
    fn from(envelope: Envelope<D, E>) -> Self {
        Self(envelope)
    }
}

impl<D: Serialize, E: Serialize> IntoResponse for JsonResponse<D, E> {
    fn into_response(self) -> Response {
        let envelope = self.0;
        let outcome = envelope.outcome();

        let bytes = match serde_json::to_vec(&envelope) {
            Ok(bytes) => bytes,
            Err(err) => {
                // Caller payloads that serde cannot render (e.g. maps with
                // non-string keys) still produce a well-formed envelope.
                tracing::error!(error = %err, %outcome, "Failed to serialize response envelope");
                return JsonResponse(Envelope::internal_error()).into_response();
            }
        };

        if outcome.is_server_error() {
            tracing::error!(%outcome, reply = envelope.message(), "Responding with server error");
        } else if outcome.is_client_error() {
            tracing::debug!(%outcome, reply = envelope.message(), "Responding with client error");
        }

        (
            status_code(outcome),
            [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            bytes,
        )
            .into_response()
    }
}

fn status_code(outcome: Outcome) -> StatusCode {
    StatusCode::from_u16(outcome.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_covers_every_outcome() {
        for outcome in Outcome::ALL {
            assert_eq!(status_code(outcome).as_u16(), outcome.status());
        }
    }
}
