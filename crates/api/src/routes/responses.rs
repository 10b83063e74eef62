//! Route definitions for envelope previews.

use axum::routing::get;
use axum::Router;

use crate::handlers::responses;
use crate::state::AppState;

/// Routes mounted at `/responses`.
///
/// ```text
/// GET    /{kind}            -> show_response
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{kind}", get(responses::show_response))
}
