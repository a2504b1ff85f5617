//! Product entity model.

use coffeehub_core::product::StatsRecord;
use coffeehub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub origin: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub roast: String,
    pub rating: f64,
    pub description: String,
    pub created_at: Timestamp,
    /// `None` until the first update.
    pub updated_at: Option<Timestamp>,
}

impl StatsRecord for Product {
    fn price(&self) -> Option<f64> {
        Some(self.price)
    }

    fn origin(&self) -> Option<&str> {
        Some(&self.origin)
    }
}
