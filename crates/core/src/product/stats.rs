//! Catalog-wide summary: count, average price, most common origin.

use std::collections::HashMap;

use serde::Serialize;

/// Placeholder origin when no record has one.
pub const NO_ORIGIN: &str = "N/A";

/// The two facts the summary needs from a stored record.
pub trait StatsRecord {
    fn price(&self) -> Option<f64>;
    fn origin(&self) -> Option<&str>;
}

/// Response shape of the stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    /// Two decimals, except `"0"` for an empty catalog.
    pub avg_price: String,
    pub popular_origin: String,
}

/// Summarize a set of stored records.
///
/// Missing or non-numeric prices count as zero. Among origins with the same
/// highest count, the one seen first wins.
pub fn aggregate<R: StatsRecord>(records: &[R]) -> CatalogStats {
    let total = records.len();

    // The empty case stays "0", not "0.00"; clients depend on it.
    let avg_price = if total == 0 {
        "0".to_string()
    } else {
        let sum: f64 = records
            .iter()
            .map(|r| r.price().filter(|p| !p.is_nan()).unwrap_or(0.0))
            .sum();
        format_two_decimals(sum / total as f64)
    };

    CatalogStats {
        total,
        avg_price,
        popular_origin: popular_origin(records).unwrap_or(NO_ORIGIN).to_string(),
    }
}

fn popular_origin<R: StatsRecord>(records: &[R]) -> Option<&str> {
    let origins: Vec<&str> = records
        .iter()
        .filter_map(|r| r.origin())
        .filter(|o| !o.is_empty())
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &origin in &origins {
        *counts.entry(origin).or_default() += 1;
    }
    let max = counts.values().copied().max()?;

    origins.into_iter().find(|o| counts[o] == max)
}

/// Fixed two-decimal rendering of the exact binary value, rounded once.
///
/// `{:.2}` already rounds the exact value to nearest. It breaks exact ties
/// to even, while clients expect ties to go away from zero. An exact tie at
/// two decimals is a whole number of eighths with an odd numerator
/// (`0.125`, `2.375`), so only those values need the correction.
fn format_two_decimals(value: f64) -> String {
    // Normalize -0.0 so it renders as "0.00".
    let value = if value == 0.0 { 0.0 } else { value };
    let eighths = value.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (value.abs() * 100.0).ceil().copysign(value);
        return format!("{:.2}", cents / 100.0);
    }
    format!("{value:.2}")
}
