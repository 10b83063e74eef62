//! Echo endpoint: validates a JSON body and returns it as `data`.

use apiresponder_core::messages;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::responder::ApiResponder;
use crate::response::JsonResponse;
use crate::state::AppState;

/// Request body for `POST /api/v1/echo`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EchoRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
}

/// POST /api/v1/echo
///
/// Malformed JSON yields `400`, missing fields and failed rules `422` with
/// field errors, otherwise `200` with the body under `data`.
pub async fn echo(
    State(state): State<AppState>,
    payload: Result<Json<EchoRequest>, JsonRejection>,
) -> AppResult<JsonResponse<EchoRequest>> {
    let Json(input) = payload?;
    input.validate()?;

    tracing::debug!(name = %input.name, "Echoing request body");
    Ok(state.success(messages::SUCCESS, Some(input)))
}
