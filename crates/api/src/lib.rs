//! axum bindings for the standard JSON response envelope.
//!
//! Exposes the building blocks (response type, responder trait, error
//! handling, config, state, routes) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod responder;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;

pub use responder::{ApiResponder, Responder};
pub use response::JsonResponse;
