//! Repository for the `products` table.

use coffeehub_core::product::{NewProduct, ProductChanges};
use coffeehub_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::Product;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, origin, type, price, roast, rating, description, created_at, updated_at";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, origin, type, price, roast, rating, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.origin)
            .bind(&input.kind)
            .bind(input.price)
            .bind(&input.roast)
            .bind(input.rating)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id ASC");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Apply the set fields of `changes` and stamp `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                origin = COALESCE($3, origin),
                type = COALESCE($4, type),
                price = COALESCE($5, price),
                roast = COALESCE($6, roast),
                rating = COALESCE($7, rating),
                description = COALESCE($8, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(&changes.origin)
            .bind(&changes.kind)
            .bind(changes.price)
            .bind(&changes.roast)
            .bind(changes.rating)
            .bind(&changes.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
