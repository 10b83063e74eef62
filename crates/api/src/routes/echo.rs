use axum::routing::post;
use axum::Router;

use crate::handlers::echo;
use crate::state::AppState;

/// Routes mounted at `/echo`.
///
/// ```text
/// POST   /                  -> echo
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(echo::echo))
}
