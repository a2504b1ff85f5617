//! Handler for the catalog summary.

use axum::extract::State;
use axum::Json;
use coffeehub_core::product::{aggregate, CatalogStats};
use coffeehub_db::repositories::ProductRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/stats
///
/// Scans the whole table on every call.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<CatalogStats>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(aggregate(&products)))
}
