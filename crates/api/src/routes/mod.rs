pub mod health;
pub mod product;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /products                 list, create
/// /products/{id}            get, update, delete
/// /stats                    catalog summary
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product::router())
        .nest("/stats", stats::router())
}
