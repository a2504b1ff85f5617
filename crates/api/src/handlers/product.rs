//! Handlers for the `/products` resource.
//!
//! Write handlers run the body through `prepare_create` / `prepare_update`
//! (sanitize, then validate) before touching the database.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use coffeehub_core::error::CoreError;
use coffeehub_core::product::{prepare_create, prepare_update, ProductInput};
use coffeehub_core::types::DbId;
use coffeehub_db::models::product::Product;
use coffeehub_db::repositories::ProductRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{IdParam, JsonBody};
use crate::state::AppState;

/// Confirmation body for a successful delete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: &'static str,
    pub deleted_id: DbId,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Product",
        id,
    })
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProductInput>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let new_product = prepare_create(&input)?;
    let product = ProductRepo::create(&state.pool, &new_product).await?;
    tracing::info!(product_id = product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/v1/products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(products))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(product))
}

/// PUT /api/v1/products/{id}
///
/// Partial update: only fields present in the body change.
pub async fn update(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    JsonBody(input): JsonBody<ProductInput>,
) -> AppResult<Json<Product>> {
    let changes = prepare_update(&input)?;
    let product = ProductRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(product_id = id, "Product updated");
    Ok(Json(product))
}

/// DELETE /api/v1/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> AppResult<Json<DeleteResponse>> {
    if ProductRepo::delete(&state.pool, id).await? {
        tracing::info!(product_id = id, "Product deleted");
        Ok(Json(DeleteResponse {
            message: "Product deleted successfully",
            deleted_id: id,
        }))
    } else {
        Err(not_found(id))
    }
}
