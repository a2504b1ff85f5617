//! Integration tests for the product repository.
//!
//! Each test gets a fresh database with migrations applied.

use coffeehub_core::product::{aggregate, NewProduct, ProductChanges};
use coffeehub_db::repositories::ProductRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_product(name: &str, price: f64, origin: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        origin: origin.to_string(),
        kind: "Arabica".to_string(),
        price,
        roast: "Medium".to_string(),
        rating: 0.0,
        description: "No description".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("Latte", 12.5, "Colombia"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Latte");
    assert_eq!(created.kind, "Arabica");
    assert_eq!(created.price, 12.5);
    assert!(created.updated_at.is_none());

    let found = ProductRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("product should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.origin, "Colombia");
    assert_eq!(found.created_at, created.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    let found = ProductRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_in_insertion_order(pool: PgPool) {
    for name in ["First", "Second", "Third"] {
        ProductRepo::create(&pool, &new_product(name, 1.0, "Peru"))
            .await
            .unwrap();
    }
    let products = ProductRepo::list(&pool).await.unwrap();
    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["First", "Second", "Third"]);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_changes_only_given_fields(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("Original", 10.0, "Brazil"))
        .await
        .unwrap();

    let changes = ProductChanges {
        name: Some("Updated".to_string()),
        price: Some(20.0),
        ..ProductChanges::default()
    };
    let updated = ProductRepo::update(&pool, created.id, &changes)
        .await
        .unwrap()
        .expect("product should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Updated");
    assert_eq!(updated.price, 20.0);
    assert_eq!(updated.origin, "Brazil");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_update_only_stamps_timestamp(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("Stable", 5.0, "Kenya"))
        .await
        .unwrap();
    let updated = ProductRepo::update(&pool, created.id, &ProductChanges::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Stable");
    assert_eq!(updated.price, 5.0);
    assert!(updated.updated_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_returns_none(pool: PgPool) {
    let result = ProductRepo::update(&pool, 999_999, &ProductChanges::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("Doomed", 3.0, "Peru"))
        .await
        .unwrap();

    assert!(ProductRepo::delete(&pool, created.id).await.unwrap());
    assert!(!ProductRepo::delete(&pool, created.id).await.unwrap());
    assert!(ProductRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_price_violates_check(pool: PgPool) {
    let result = ProductRepo::create(&pool, &new_product("Bad", -1.0, "Peru")).await;
    assert!(result.is_err(), "CHECK constraint should reject a negative price");
}

// ---------------------------------------------------------------------------
// Stats over stored rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_aggregate_stored_rows(pool: PgPool) {
    ProductRepo::create(&pool, &new_product("A", 10.0, "Colombia"))
        .await
        .unwrap();
    ProductRepo::create(&pool, &new_product("B", 20.0, "Colombia"))
        .await
        .unwrap();
    ProductRepo::create(&pool, &new_product("C", 30.0, "Ethiopia"))
        .await
        .unwrap();

    let products = ProductRepo::list(&pool).await.unwrap();
    let stats = aggregate(&products);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.avg_price, "20.00");
    assert_eq!(stats.popular_origin, "Colombia");
}
