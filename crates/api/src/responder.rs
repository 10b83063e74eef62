//! The response formatter handlers mix in.
//!
//! Implement [`ApiResponder`] with an empty `impl` block on any handler type
//! (or shared state) to get one method per response outcome, or hold a
//! [`Responder`] value:
//!
//! ```ignore
//! impl ApiResponder for ProjectHandler {}
//!
//! fn show(&self, project: Project) -> JsonResponse<Project> {
//!     self.success(messages::SUCCESS, Some(project))
//! }
//! ```
//!
//! Methods that take an optional payload are generic over it, so a bare
//! `None` needs a type: `self.success("Deleted", None::<Value>)`.
//!
//! Every method takes the message explicitly. For the default message of an
//! outcome use [`ApiResponder::respond`], e.g. `self.respond(Outcome::NotFound)`,
//! or convert an `Envelope` constructor: `Envelope::forbidden().into()`.

use apiresponder_core::{Envelope, Outcome};
use serde::Serialize;
use serde_json::Value;

use crate::response::JsonResponse;

/// One method per outcome, each returning the envelope with its fixed
/// status code. None of them can fail.
pub trait ApiResponder {
    /// The outcome's default message and default shape, without payload.
    fn respond(&self, outcome: Outcome) -> JsonResponse {
        JsonResponse(Envelope::for_outcome(outcome))
    }

    /// `200`. `data` is included only when `Some` and not `null`.
    fn success<D: Serialize>(
        &self,
        message: impl Into<String>,
        data: Option<D>,
    ) -> JsonResponse<D> {
        let envelope = Envelope::new(Outcome::Success, message, data, None);
        JsonResponse(envelope)
    }

    /// `200` with `value` under `key`, always included.
    fn success_with<D: Serialize>(
        &self,
        message: impl Into<String>,
        key: impl Into<String>,
        value: D,
    ) -> JsonResponse<D> {
        JsonResponse(Envelope::success_with(message, key, value))
    }

    /// `409`. The request conflicts with the current state of the server.
    fn failure<D: Serialize>(
        &self,
        message: impl Into<String>,
        data: Option<D>,
    ) -> JsonResponse<D> {
        let envelope = Envelope::new(Outcome::Failure, message, data, None);
        JsonResponse(envelope)
    }

    /// `422`. `errors` defaults to an empty list.
    fn validation_failed<E: Serialize>(
        &self,
        message: impl Into<String>,
        errors: Option<E>,
    ) -> JsonResponse<Value, E> {
        let envelope = Envelope::new(Outcome::ValidationFailed, message, None, errors);
        JsonResponse(envelope)
    }

    /// `404`. `errors` defaults to `"Not specified"`.
    fn not_found<E: Serialize>(
        &self,
        message: impl Into<String>,
        errors: Option<E>,
    ) -> JsonResponse<Value, E> {
        let envelope = Envelope::new(Outcome::NotFound, message, None, errors);
        JsonResponse(envelope)
    }

    /// `401`. Semantically "unauthenticated"; `errors` is `[message]`.
    fn unauthorized(&self, message: impl Into<String>) -> JsonResponse {
        JsonResponse(Envelope::unauthorized().with_message(message))
    }

    /// `403`, message only.
    fn forbidden(&self, message: impl Into<String>) -> JsonResponse {
        JsonResponse(Envelope::forbidden().with_message(message))
    }

    /// `400`. `errors` is `[message]`.
    fn bad_request(&self, message: impl Into<String>) -> JsonResponse {
        JsonResponse(Envelope::bad_request().with_message(message))
    }

    /// `429`. `errors` is `[message]`.
    fn too_many_requests(&self, message: impl Into<String>) -> JsonResponse {
        JsonResponse(Envelope::too_many_requests().with_message(message))
    }
}

/// Stateless formatter for handlers that compose rather than implement
/// [`ApiResponder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Responder;

impl ApiResponder for Responder {}
