//! Tests for `AppError` → HTTP response mapping.
//!
//! They call `IntoResponse` directly on `AppError` values, or run the
//! extractors on hand-built requests; no server or database is involved.

use assert_matches::assert_matches;
use atsukai_api::error::AppError;
use atsukai_api::extract::{JsonBody, QueryParams};
use atsukai_core::error::CoreError;
use atsukai_core::validation::validate_swap_pair;
use atsukai_db::models::atsukai::CreateAtsukai;
use atsukai_db::models::memo::MemoLookup;
use axum::body::Body;
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with a `message` field
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404_with_message() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Atsukai",
        id: 999,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Atsukai with id 999 not found");
    assert!(json.get("error").is_none());
}

// ---------------------------------------------------------------------------
// Test: validation and bad requests map to 400 with an `error` field
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("name: must not be blank".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name: must not be blank");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

// ---------------------------------------------------------------------------
// Test: store errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Resource not found");
}

#[tokio::test]
async fn pool_timeout_passes_store_message_through() {
    let expected = sqlx::Error::PoolTimedOut.to_string();

    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORE_ERROR");
    assert_eq!(json["error"], expected);
}

#[tokio::test]
async fn protocol_error_returns_500() {
    let err = AppError::Database(sqlx::Error::Protocol("unexpected message".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORE_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("unexpected message"));
}

// ---------------------------------------------------------------------------
// Test: conversions into AppError
// ---------------------------------------------------------------------------

#[test]
fn core_and_store_errors_convert_into_matching_variants() {
    let swap: Result<(), AppError> = validate_swap_pair(5, 5).map_err(AppError::from);
    assert_matches!(swap, Err(AppError::Core(CoreError::Validation(_))));

    let missing = AppError::from(CoreError::NotFound {
        entity: "Memo",
        id: 7,
    });
    assert_matches!(
        missing,
        AppError::Core(CoreError::NotFound {
            entity: "Memo",
            id: 7
        })
    );

    assert_matches!(
        AppError::from(sqlx::Error::RowNotFound),
        AppError::Database(sqlx::Error::RowNotFound)
    );
}

// ---------------------------------------------------------------------------
// Test: extractor rejections become BadRequest
// ---------------------------------------------------------------------------

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/atsukai")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn json_body_missing_field_is_bad_request() {
    let result = JsonBody::<CreateAtsukai>::from_request(json_request("{}"), &()).await;
    assert_matches!(result, Err(AppError::BadRequest(msg)) => {
        assert!(msg.contains("name"), "got: {msg}");
    });
}

#[tokio::test]
async fn json_body_syntax_error_is_bad_request() {
    let result = JsonBody::<CreateAtsukai>::from_request(json_request("{\"name\":"), &()).await;
    let err = result.unwrap_err();
    assert_matches!(err, AppError::BadRequest(_));

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn json_body_without_content_type_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/atsukai")
        .body(Body::from(r#"{"name":"Office"}"#))
        .unwrap();
    let result = JsonBody::<CreateAtsukai>::from_request(request, &()).await;
    assert_matches!(result, Err(AppError::BadRequest(_)));
}

#[tokio::test]
async fn query_missing_param_is_bad_request() {
    let (mut parts, _) = Request::builder()
        .uri("/memo?type_id=3")
        .body(Body::empty())
        .unwrap()
        .into_parts();
    let result = QueryParams::<MemoLookup>::from_request_parts(&mut parts, &()).await;
    assert_matches!(result, Err(AppError::BadRequest(msg)) => {
        assert!(msg.contains("atsukai_id"), "got: {msg}");
    });
}

#[tokio::test]
async fn query_with_both_params_extracts() {
    let (mut parts, _) = Request::builder()
        .uri("/memo?type_id=3&atsukai_id=7")
        .body(Body::empty())
        .unwrap()
        .into_parts();
    let result = QueryParams::<MemoLookup>::from_request_parts(&mut parts, &()).await;
    assert_matches!(result, Ok(QueryParams(MemoLookup { type_id: 3, atsukai_id: 7 })));
}
