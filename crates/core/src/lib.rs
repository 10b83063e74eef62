//! Framework-independent model of the standard JSON response envelope.
//!
//! Every API response carries `status` and `message`, plus an optional
//! `data` payload or `errors` detail depending on the [`Outcome`]. The web
//! layer (`apiresponder-api`) pairs an [`Envelope`] with its HTTP status.

pub mod envelope;
pub mod error;
pub mod messages;
pub mod outcome;

pub use envelope::Envelope;
pub use error::CoreError;
pub use outcome::Outcome;
