//! Well-known response message constants.
//!
//! The per-outcome defaults are returned by [`Outcome::default_message`];
//! the remaining constants are common phrasings handlers can reuse.
//!
//! [`Outcome::default_message`]: crate::outcome::Outcome::default_message

pub const SUCCESS: &str = "Success";
pub const FAILED: &str = "Failed";
pub const VALIDATION_FAILED: &str = "Validation Failed";
pub const RESOURCE_NOT_FOUND: &str = "Resource not found";
pub const UNAUTHORIZED: &str = "Unauthorized";
pub const FORBIDDEN: &str = "Forbidden";
pub const BAD_REQUEST: &str = "Bad request";
pub const REQUEST_TIMEOUT: &str = "Request timed out";
pub const TOO_MANY_REQUESTS: &str = "Too many requests";

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const SOMETHING_WRONG: &str = "Something went wrong!";
pub const SOMETHING_WRONG_LATER: &str = "Something went wrong! Please try again later";

/// Placeholder `errors` value for a not-found response without details.
pub const NOT_SPECIFIED: &str = "Not specified";
