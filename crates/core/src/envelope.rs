//! The standard `{ "status", "message", "data" | "errors" }` response envelope.
//!
//! Use the per-outcome constructors instead of ad-hoc
//! `serde_json::json!({ "status": ... })` so the status code and field shape
//! can never drift apart:
//!
//! ```
//! use apiresponder_core::Envelope;
//! use serde_json::json;
//!
//! let body = serde_json::to_value(Envelope::success().with_data(json!({ "id": 1 }))).unwrap();
//! assert_eq!(body, json!({ "status": 200, "message": "Success", "data": { "id": 1 } }));
//! ```

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::messages;
use crate::outcome::Outcome;

/// A response envelope for a single [`Outcome`].
///
/// `D` is the `data` payload type (or the custom value for
/// [`Outcome::SuccessWith`]), `E` the caller-supplied `errors` type. Both
/// default to [`serde_json::Value`].
///
/// Which optional fields appear on the wire depends only on the outcome:
///
/// | Outcome                          | Extra fields                              |
/// |----------------------------------|-------------------------------------------|
/// | `Success`, `Failure`             | `data`, only when present                 |
/// | `SuccessWith`                    | the custom key, always                    |
/// | `ValidationFailed`               | `errors`, `[]` when absent                |
/// | `NotFound`                       | `errors`, `"Not specified"` when absent   |
/// | `Unauthorized`, `BadRequest`, `TooManyRequests` | `errors: [message]`        |
/// | `Forbidden`, `RequestTimeout`, `InternalError` | none                        |
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<D = Value, E = Value> {
    outcome: Outcome,
    message: String,
    key: Option<String>,
    data: Option<D>,
    errors: Option<E>,
}

impl<D, E> Envelope<D, E> {
    /// Build an envelope for any outcome.
    ///
    /// `data` is dropped for outcomes that do not carry a payload and
    /// `errors` for outcomes whose `errors` field is fixed. `SuccessWith`
    /// needs a key, so it is built as a plain `Success`; use
    /// [`Envelope::success_with`] instead.
    pub fn new(
        outcome: Outcome,
        message: impl Into<String>,
        data: Option<D>,
        errors: Option<E>,
    ) -> Self {
        // Without a key there is nothing to put a custom value under.
        let outcome = match outcome {
            Outcome::SuccessWith => Outcome::Success,
            other => other,
        };
        Self {
            outcome,
            message: message.into(),
            key: None,
            data: data.filter(|_| outcome.carries_data()),
            errors: errors.filter(|_| outcome.carries_errors()),
        }
    }

    /// Replace the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach a `data` payload (the custom value for `SuccessWith`).
    ///
    /// Ignored for outcomes that do not carry a payload.
    pub fn with_data<T>(self, data: T) -> Envelope<T, E> {
        let data = Some(data).filter(|_| self.outcome.carries_data());
        Envelope {
            outcome: self.outcome,
            message: self.message,
            key: self.key,
            data,
            errors: self.errors,
        }
    }

    /// Attach caller `errors`. Only `ValidationFailed` and `NotFound` accept them.
    pub fn with_errors<T>(self, errors: T) -> Envelope<D, T> {
        let errors = Some(errors).filter(|_| self.outcome.carries_errors());
        Envelope {
            outcome: self.outcome,
            message: self.message,
            key: self.key,
            data: self.data,
            errors,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// HTTP status code; always matches the outcome.
    pub fn status(&self) -> u16 {
        self.outcome.status()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    pub fn errors(&self) -> Option<&E> {
        self.errors.as_ref()
    }

    fn shadows(&self, field: &str) -> bool {
        self.key.as_deref() == Some(field)
    }
}

impl<D> Envelope<D> {
    /// Success response with `value` stored under a caller-chosen `key`.
    ///
    /// A key of `status` or `message` replaces that field.
    pub fn success_with(message: impl Into<String>, key: impl Into<String>, value: D) -> Self {
        Self {
            outcome: Outcome::SuccessWith,
            message: message.into(),
            key: Some(key.into()),
            data: Some(value),
            errors: None,
        }
    }
}

impl Envelope {
    /// `200 Success` with no payload.
    pub fn success() -> Self {
        Self::new(Outcome::Success, messages::SUCCESS, None, None)
    }

    /// `409 Failed` with no payload.
    pub fn failure() -> Self {
        Self::new(Outcome::Failure, messages::FAILED, None, None)
    }

    /// `422 Validation Failed` with an empty `errors` list.
    pub fn validation_failed() -> Self {
        Self::new(
            Outcome::ValidationFailed,
            messages::VALIDATION_FAILED,
            None,
            None,
        )
    }

    /// `404 Resource not found` with `errors: "Not specified"`.
    pub fn not_found() -> Self {
        Self::new(Outcome::NotFound, messages::RESOURCE_NOT_FOUND, None, None)
    }

    pub fn unauthorized() -> Self {
        Self::new(Outcome::Unauthorized, messages::UNAUTHORIZED, None, None)
    }

    pub fn forbidden() -> Self {
        Self::new(Outcome::Forbidden, messages::FORBIDDEN, None, None)
    }

    pub fn bad_request() -> Self {
        Self::new(Outcome::BadRequest, messages::BAD_REQUEST, None, None)
    }

    /// `408`, message only.
    pub fn request_timeout() -> Self {
        Self::new(Outcome::RequestTimeout, messages::REQUEST_TIMEOUT, None, None)
    }

    pub fn too_many_requests() -> Self {
        Self::new(
            Outcome::TooManyRequests,
            messages::TOO_MANY_REQUESTS,
            None,
            None,
        )
    }

    /// `500` with a sanitized message. Never carries error details.
    pub fn internal_error() -> Self {
        Self::new(
            Outcome::InternalError,
            messages::SOMETHING_WRONG_LATER,
            None,
            None,
        )
    }

    /// Default-message envelope for `outcome`.
    ///
    /// For `SuccessWith`, which has no meaningful default, this is a plain
    /// success envelope.
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::SuccessWith => Self::success(),
            other => Self::new(other, other.default_message(), None, None),
        }
    }
}

impl<D: Serialize, E: Serialize> Serialize for Envelope<D, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        // A custom key named after a built-in field takes that field's slot.
        match (self.shadows("status"), &self.data) {
            (true, Some(value)) => map.serialize_entry("status", value)?,
            _ => map.serialize_entry("status", &self.status())?,
        }
        match (self.shadows("message"), &self.data) {
            (true, Some(value)) => map.serialize_entry("message", value)?,
            _ => map.serialize_entry("message", &self.message)?,
        }

        match (&self.key, &self.data) {
            (Some(key), _) if key == "status" || key == "message" => {}
            (Some(key), Some(value)) => map.serialize_entry(key, value)?,
            (None, data) => {
                if let Some(data) = non_null::<_, S>(data.as_ref())? {
                    map.serialize_entry("data", &data)?;
                }
            }
            _ => {}
        }

        let errors = non_null::<_, S>(self.errors.as_ref())?;
        match (self.outcome, errors) {
            (_, Some(errors)) => map.serialize_entry("errors", &errors)?,
            (Outcome::ValidationFailed, None) => {
                map.serialize_entry("errors", &[] as &[Value])?;
            }
            (Outcome::NotFound, None) => {
                map.serialize_entry("errors", messages::NOT_SPECIFIED)?;
            }
            (outcome, None) if outcome.echoes_message() => {
                map.serialize_entry("errors", &[&self.message])?;
            }
            _ => {}
        }

        map.end()
    }
}

/// Render an optional payload, treating one that serializes to `null` as absent.
fn non_null<T: Serialize, S: Serializer>(value: Option<&T>) -> Result<Option<Value>, S::Error> {
    let Some(value) = value else {
        return Ok(None);
    };
    let value = serde_json::to_value(value).map_err(S::Error::custom)?;
    Ok(Some(value).filter(|value| !value.is_null()))
}
