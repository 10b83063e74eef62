pub mod echo;
pub mod health;
pub mod responses;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /responses/{kind}        envelope for one outcome kind
/// /echo                    validated echo of a JSON body
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/responses", responses::router())
        .nest("/echo", echo::router())
}
