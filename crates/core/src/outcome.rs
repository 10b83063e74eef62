//! Semantic response outcomes and their fixed HTTP status mapping.

use std::fmt;
use std::str::FromStr;

use crate::messages;

/// The kind of result a response envelope reports.
///
/// Each outcome has a fixed HTTP status code and a default message. The
/// status in the JSON body always equals the HTTP status of the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    /// Success with a caller-chosen key in place of `data`.
    SuccessWith,
    /// The request conflicts with the current state of the server.
    Failure,
    ValidationFailed,
    NotFound,
    /// The client must authenticate itself first.
    Unauthorized,
    /// The client is authenticated but lacks access rights.
    Forbidden,
    BadRequest,
    /// The server gave up waiting for the handler.
    RequestTimeout,
    TooManyRequests,
    InternalError,
}

impl Outcome {
    /// All outcomes, in table order.
    pub const ALL: [Outcome; 11] = [
        Outcome::Success,
        Outcome::SuccessWith,
        Outcome::Failure,
        Outcome::ValidationFailed,
        Outcome::NotFound,
        Outcome::Unauthorized,
        Outcome::Forbidden,
        Outcome::BadRequest,
        Outcome::RequestTimeout,
        Outcome::TooManyRequests,
        Outcome::InternalError,
    ];

    /// HTTP status code for this outcome.
    pub const fn status(self) -> u16 {
        match self {
            Outcome::Success | Outcome::SuccessWith => 200,
            Outcome::BadRequest => 400,
            Outcome::Unauthorized => 401,
            Outcome::Forbidden => 403,
            Outcome::NotFound => 404,
            Outcome::RequestTimeout => 408,
            Outcome::Failure => 409,
            Outcome::ValidationFailed => 422,
            Outcome::TooManyRequests => 429,
            Outcome::InternalError => 500,
        }
    }

    /// Message used when the caller does not supply one.
    ///
    /// `SuccessWith` always takes a caller message; [`messages::SUCCESS`] is
    /// returned for it only so the mapping is total.
    pub const fn default_message(self) -> &'static str {
        match self {
            Outcome::Success | Outcome::SuccessWith => messages::SUCCESS,
            Outcome::Failure => messages::FAILED,
            Outcome::ValidationFailed => messages::VALIDATION_FAILED,
            Outcome::NotFound => messages::RESOURCE_NOT_FOUND,
            Outcome::Unauthorized => messages::UNAUTHORIZED,
            Outcome::Forbidden => messages::FORBIDDEN,
            Outcome::BadRequest => messages::BAD_REQUEST,
            Outcome::RequestTimeout => messages::REQUEST_TIMEOUT,
            Outcome::TooManyRequests => messages::TOO_MANY_REQUESTS,
            Outcome::InternalError => messages::SOMETHING_WRONG_LATER,
        }
    }

    /// Stable kebab-case name, as used in URLs.
    pub const fn slug(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::SuccessWith => "success-with",
            Outcome::Failure => "failure",
            Outcome::ValidationFailed => "validation-failed",
            Outcome::NotFound => "not-found",
            Outcome::Unauthorized => "unauthorized",
            Outcome::Forbidden => "forbidden",
            Outcome::BadRequest => "bad-request",
            Outcome::RequestTimeout => "request-timeout",
            Outcome::TooManyRequests => "too-many-requests",
            Outcome::InternalError => "internal-error",
        }
    }

    /// Whether the envelope may carry a caller `data` payload.
    pub const fn carries_data(self) -> bool {
        matches!(
            self,
            Outcome::Success | Outcome::SuccessWith | Outcome::Failure
        )
    }

    /// Whether the envelope may carry caller-supplied `errors`.
    pub const fn carries_errors(self) -> bool {
        matches!(self, Outcome::ValidationFailed | Outcome::NotFound)
    }

    /// Whether `errors` is a one-element list echoing the message.
    pub const fn echoes_message(self) -> bool {
        matches!(
            self,
            Outcome::Unauthorized | Outcome::BadRequest | Outcome::TooManyRequests
        )
    }

    pub const fn is_client_error(self) -> bool {
        let status = self.status();
        status >= 400 && status < 500
    }

    pub const fn is_server_error(self) -> bool {
        self.status() >= 500
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Returned when parsing an unknown outcome name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown response kind: {0}")]
pub struct UnknownOutcome(pub String);

impl FromStr for Outcome {
    type Err = UnknownOutcome;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Outcome::ALL
            .into_iter()
            .find(|outcome| outcome.slug() == s)
            .ok_or_else(|| UnknownOutcome(s.to_string()))
    }
}
