//! Tests for the `ApiResponder` formatter.
//!
//! Each formatter method is converted with `IntoResponse` directly; no HTTP
//! server is needed. The HTTP status and the body's `status` field must
//! always agree.

use std::collections::HashMap;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde::Serialize;
use serde_json::{json, Value};

use apiresponder_api::{ApiResponder, JsonResponse, Responder};

/// Helper: convert a formatter result into its status code and parsed JSON body.
async fn render<D: Serialize, E: Serialize>(response: JsonResponse<D, E>) -> (StatusCode, Value) {
    let response = response.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// A handler type that mixes the formatter in.
struct UsersHandler;

impl ApiResponder for UsersHandler {}

// ---------------------------------------------------------------------------
// success / success_with
// ---------------------------------------------------------------------------

#[tokio::test]
async fn success_without_data_omits_data_field() {
    let (status, json) = render(Responder.success("Success", None::<Value>)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": 200, "message": "Success" }));
}

#[tokio::test]
async fn success_with_data_includes_exact_payload() {
    let (status, json) = render(UsersHandler.success("OK", Some(json!({ "id": 1 })))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "status": 200, "message": "OK", "data": { "id": 1 } })
    );
}

#[tokio::test]
async fn success_with_typed_payload() {
    #[derive(Serialize)]
    struct User {
        id: i64,
        name: &'static str,
    }

    let users = vec![User { id: 1, name: "ada" }, User { id: 2, name: "bo" }];
    let (_, json) = render(UsersHandler.success("Users", Some(users))).await;

    assert_eq!(json["data"][1]["name"], "bo");
}

#[tokio::test]
async fn success_with_custom_key() {
    let (status, json) =
        render(Responder.success_with("Logged in", "access_token", "tok_123")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "status": 200, "message": "Logged in", "access_token": "tok_123" })
    );
}

// ---------------------------------------------------------------------------
// failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failure_returns_409() {
    let (status, json) = render(Responder.failure("Failed", None::<Value>)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json, json!({ "status": 409, "message": "Failed" }));
}

#[tokio::test]
async fn failure_includes_data_when_given() {
    let (_, json) = render(Responder.failure("Stale", Some(json!({ "version": 3 })))).await;

    assert_eq!(json["status"], 409);
    assert_eq!(json["data"], json!({ "version": 3 }));
}

// ---------------------------------------------------------------------------
// validation_failed / not_found
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_failed_defaults_to_empty_errors() {
    let (status, json) = render(Responder.validation_failed("Invalid", None::<Value>)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json,
        json!({ "status": 422, "message": "Invalid", "errors": [] })
    );
}

#[tokio::test]
async fn validation_failed_with_field_errors() {
    let errors = HashMap::from([("email", vec!["The email must be a valid email address."])]);
    let (_, json) = render(Responder.validation_failed("Check your input", Some(errors))).await;

    assert_eq!(json["message"], "Check your input");
    assert_eq!(
        json["errors"]["email"][0],
        "The email must be a valid email address."
    );
}

#[tokio::test]
async fn not_found_defaults_to_not_specified() {
    let (status, json) = render(Responder.not_found("Resource not found", None::<Value>)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        json!({ "status": 404, "message": "Resource not found", "errors": "Not specified" })
    );
}

#[tokio::test]
async fn not_found_with_errors() {
    let (_, json) = render(Responder.not_found("User missing", Some(vec!["user 7"]))).await;

    assert_eq!(json["errors"], json!(["user 7"]));
}

// ---------------------------------------------------------------------------
// unauthorized / forbidden / bad_request / too_many_requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthorized_errors_echo_message() {
    let (status, json) = render(Responder.unauthorized("Token expired")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        json,
        json!({ "status": 401, "message": "Token expired", "errors": ["Token expired"] })
    );
}

#[tokio::test]
async fn forbidden_is_message_only() {
    let (status, json) = render(Responder.forbidden("Forbidden")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json, json!({ "status": 403, "message": "Forbidden" }));
}

#[tokio::test]
async fn bad_request_errors_echo_message() {
    let (status, json) = render(Responder.bad_request("Bad input")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "status": 400, "message": "Bad input", "errors": ["Bad input"] })
    );
}

#[tokio::test]
async fn too_many_requests_returns_429() {
    let (status, json) = render(Responder.too_many_requests("Slow down")).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["errors"], json!(["Slow down"]));
}

// ---------------------------------------------------------------------------
// Transport details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn responses_are_json() {
    let response = Responder.success("Success", None::<Value>).into_response();

    let content_type = response.headers().get(CONTENT_TYPE).unwrap();
    assert_eq!(content_type, "application/json");
}

#[tokio::test]
async fn unserializable_payload_becomes_500_envelope() {
    // serde_json cannot encode maps whose keys are not strings.
    let data = HashMap::from([((1, 2), "pair")]);
    let (status, json) = render(Responder.success("Success", Some(data))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        json!({ "status": 500, "message": "Something went wrong! Please try again later" })
    );
}
