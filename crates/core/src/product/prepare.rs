//! Turning request bodies into storage-ready values.

use serde::Serialize;

use super::{
    sanitize, validate, Field, ProductDraft, ProductInput, TextValue, ValidationMode,
    DEFAULT_DESCRIPTION, DEFAULT_ORIGIN, DEFAULT_RATING, DEFAULT_ROAST, DEFAULT_TYPE,
};
use crate::error::CoreError;

/// A fully populated product ready for insertion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub origin: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub roast: String,
    pub rating: f64,
    pub description: String,
}

/// The fields a partial update sets. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub origin: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub price: Option<f64>,
    pub roast: Option<String>,
    pub rating: Option<f64>,
    pub description: Option<String>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Sanitize and validate a create body, then fill in defaults for
/// everything optional that was left out or empty.
pub fn prepare_create(raw: &ProductInput) -> Result<NewProduct, CoreError> {
    let draft = sanitize(raw);
    validate(&draft, ValidationMode::Create).into_result()?;
    into_new_product(draft)
}

/// Sanitize and validate an update body, keeping only the fields it sets.
///
/// Explicit `null` on an optional text field leaves the stored value as is.
pub fn prepare_update(raw: &ProductInput) -> Result<ProductChanges, CoreError> {
    let draft = sanitize(raw);
    validate(&draft, ValidationMode::Update).into_result()?;
    Ok(ProductChanges {
        name: text(draft.name),
        origin: text(draft.origin),
        kind: text(draft.kind),
        price: draft.price.value().copied(),
        roast: text(draft.roast),
        rating: draft.rating.value().copied(),
        description: text(draft.description),
    })
}

fn into_new_product(draft: ProductDraft) -> Result<NewProduct, CoreError> {
    let name = text(draft.name)
        .ok_or_else(|| CoreError::Validation("name missing after validation".into()))?;
    let price = draft
        .price
        .value()
        .copied()
        .filter(|p| p.is_finite())
        .ok_or_else(|| CoreError::Validation("price missing after validation".into()))?;

    Ok(NewProduct {
        name,
        origin: text_or(draft.origin, DEFAULT_ORIGIN),
        kind: text_or(draft.kind, DEFAULT_TYPE),
        price,
        roast: text_or(draft.roast, DEFAULT_ROAST),
        // Zero and unset both mean "not rated".
        rating: draft
            .rating
            .value()
            .copied()
            .filter(|r| *r != 0.0)
            .unwrap_or(DEFAULT_RATING),
        description: text_or(draft.description, DEFAULT_DESCRIPTION),
    })
}

fn text(field: Field<TextValue>) -> Option<String> {
    match field {
        Field::Value(TextValue::Text(s)) => Some(s),
        _ => None,
    }
}

/// Empty text counts as unset.
fn text_or(field: Field<TextValue>, default: &str) -> String {
    text(field)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}
