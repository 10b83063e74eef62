//! Keeps middleware-generated error responses in the standard envelope.
//!
//! tower-http's panic and timeout layers answer with their own bodies
//! (`text/plain` and empty respectively). These hooks replace them so every
//! error a client sees has the same JSON shape.

use std::any::Any;

use apiresponder_core::Envelope;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::response::JsonResponse;

/// Panic handler for `CatchPanicLayer::custom`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "Handler panicked");

    JsonResponse(Envelope::internal_error()).into_response()
}

/// Response mapper for the layer wrapping `TimeoutLayer`.
///
/// Only the timeout layer's own reply is rewritten: a 408 without a
/// content type. Handlers that return a 408 envelope themselves pass through.
pub async fn envelope_timeout(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(CONTENT_TYPE)
    {
        tracing::warn!("Request timed out");
        return JsonResponse(Envelope::request_timeout()).into_response();
    }
    response
}
