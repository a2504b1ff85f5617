//! HTTP-level integration tests for the `/stats` endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_product, get};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_on_empty_catalog(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({"total": 0, "avgPrice": "0", "popularOrigin": "N/A"})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_with_products(pool: PgPool) {
    create_product(&pool, json!({"name": "Stats1", "price": 10, "origin": "Colombia"})).await;
    create_product(&pool, json!({"name": "Stats2", "price": 20, "origin": "Colombia"})).await;

    let json = body_json(get(build_test_app(pool), "/api/v1/stats").await).await;
    assert_eq!(
        json,
        json!({"total": 2, "avgPrice": "15.00", "popularOrigin": "Colombia"})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_most_frequent_origin(pool: PgPool) {
    create_product(&pool, json!({"name": "A1", "price": 1, "origin": "Kenya"})).await;
    create_product(&pool, json!({"name": "B1", "price": 2, "origin": "Peru"})).await;
    create_product(&pool, json!({"name": "B2", "price": 3, "origin": "Peru"})).await;

    let json = body_json(get(build_test_app(pool), "/api/v1/stats").await).await;
    assert_eq!(json["total"], 3);
    assert_eq!(json["avgPrice"], "2.00");
    assert_eq!(json["popularOrigin"], "Peru");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_counts_defaulted_origin(pool: PgPool) {
    create_product(&pool, json!({"name": "NoOrigin", "price": 5})).await;

    let json = body_json(get(build_test_app(pool), "/api/v1/stats").await).await;
    assert_eq!(json["popularOrigin"], "Unknown");
    assert_eq!(json["avgPrice"], "5.00");
}
