//! HTTP-level integration tests for `/atsukai`, including reordering.
//!
//! Requests go straight to the router through `tower::ServiceExt`, without
//! a TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_id, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_assigns_increasing_display_order(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/atsukai", json!({"name": "Office"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let office = body_json(response).await;
    assert!(office["id"].is_number());
    assert_eq!(office["name"], "Office");
    assert_eq!(office["display_order"], 1);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/atsukai", json!({"name": "Home"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let home = body_json(response).await;
    assert_eq!(home["display_order"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_is_ordered_by_display_order(pool: PgPool) {
    let a = create_id(&pool, "/atsukai", json!({"name": "A"})).await;
    let b = create_id(&pool, "/atsukai", json!({"name": "B"})).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/atsukai/reorder", json!({"id1": a, "id2": b})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/atsukai").await).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![b, a]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_update_and_delete(pool: PgPool) {
    let id = create_id(&pool, "/atsukai", json!({"name": "Original"})).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/atsukai/{id}"), json!({"name": "Renamed"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Renamed");

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/atsukai/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Renamed");
    assert_eq!(json["display_order"], 1);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/atsukai/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], id);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/atsukai/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_missing_returns_404_with_message(pool: PgPool) {
    let keep = create_id(&pool, "/atsukai", json!({"name": "Keep"})).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/atsukai/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Atsukai with id 999 not found");
    assert_eq!(json["code"], "NOT_FOUND");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/atsukai/{keep}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/atsukai/424242", json!({"name": "Ghost"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_blank_name_is_rejected_before_insert(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/atsukai", json!({"name": "   "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name: must not be blank");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/atsukai").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_name_field_is_400_with_json_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/atsukai", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(
        json["error"].as_str().unwrap().contains("name"),
        "got: {json}"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_wrongly_typed_field_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/atsukai", json!({"name": 42})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_numeric_id_is_400_with_json_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/atsukai/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

// ---------------------------------------------------------------------------
// Reorder
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reorder_swaps_and_returns_both_rows(pool: PgPool) {
    let n = create_id(&pool, "/atsukai", json!({"name": "N"})).await;
    let m = create_id(&pool, "/atsukai", json!({"name": "M"})).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/atsukai/reorder", json!({"id1": n, "id2": m})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "display order swapped");
    assert_eq!(json["swapped"][0]["id"], n);
    assert_eq!(json["swapped"][0]["display_order"], 2);
    assert_eq!(json["swapped"][1]["id"], m);
    assert_eq!(json["swapped"][1]["display_order"], 1);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/atsukai/{n}")).await).await;
    assert_eq!(json["display_order"], 2);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/atsukai/{m}")).await).await;
    assert_eq!(json["display_order"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reorder_with_missing_id_returns_404_and_changes_nothing(pool: PgPool) {
    let a = create_id(&pool, "/atsukai", json!({"name": "A"})).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/atsukai/reorder", json!({"id1": a, "id2": 999_999})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Atsukai with id 999999 not found");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/atsukai/{a}")).await).await;
    assert_eq!(json["display_order"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reorder_same_id_is_rejected(pool: PgPool) {
    let a = create_id(&pool, "/atsukai", json!({"name": "A"})).await;

    let app = common::build_test_app(pool);
    let response = put_json(app, "/atsukai/reorder", json!({"id1": a, "id2": a})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Direct order set
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_set_order_overwrites_one_row(pool: PgPool) {
    let a = create_id(&pool, "/atsukai", json!({"name": "A"})).await;
    let b = create_id(&pool, "/atsukai", json!({"name": "B"})).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/atsukai/{a}/order"), json!({"display_order": 9})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["display_order"], 9);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/atsukai/{b}")).await).await;
    assert_eq!(json["display_order"], 2);

    // The next insert lands after the new maximum.
    let app = common::build_test_app(pool);
    let response = post_json(app, "/atsukai", json!({"name": "C"})).await;
    assert_eq!(body_json(response).await["display_order"], 10);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_set_order_on_missing_row_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/atsukai/31337/order", json!({"display_order": 1})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_set_order_rejects_values_without_headroom(pool: PgPool) {
    let a = create_id(&pool, "/atsukai", json!({"name": "A"})).await;

    for order in [i32::MAX, 0, -3] {
        let app = common::build_test_app(pool.clone());
        let response =
            put_json(app, &format!("/atsukai/{a}/order"), json!({"display_order": order})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "order {order}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    // The rejected writes left room for the next insert.
    let app = common::build_test_app(pool);
    let response = post_json(app, "/atsukai", json!({"name": "B"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["display_order"], 2);
}
