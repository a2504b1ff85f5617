//! Product record pipeline: sanitize, validate, prepare for storage, and
//! summarize.
//!
//! A request body is deserialized into a [`ProductInput`], normalized by
//! [`sanitize`] into a [`ProductDraft`], checked by [`validate`], and turned
//! into a [`NewProduct`] or [`ProductChanges`] by [`prepare_create`] /
//! [`prepare_update`]. Stored rows are summarized by [`aggregate`].

pub mod field;
pub mod prepare;
pub mod sanitizer;
pub mod stats;
pub mod validator;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use field::Field;
pub use prepare::{prepare_create, prepare_update, NewProduct, ProductChanges};
pub use sanitizer::sanitize;
pub use stats::{aggregate, CatalogStats, StatsRecord};
pub use validator::{validate, ValidationMode, ValidationReport};

/// Longest accepted product name, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Highest accepted price.
pub const MAX_PRICE: f64 = 999_999.99;

/// Accepted rating range, inclusive.
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

pub const DEFAULT_ORIGIN: &str = "Unknown";
pub const DEFAULT_TYPE: &str = "Unknown";
pub const DEFAULT_ROAST: &str = "Medium";
pub const DEFAULT_DESCRIPTION: &str = "No description";
pub const DEFAULT_RATING: f64 = 0.0;

/// A product body exactly as received: any JSON per known key.
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProductInput {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub name: Field<Value>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub origin: Field<Value>,
    #[serde(rename = "type", skip_serializing_if = "Field::is_absent")]
    pub kind: Field<Value>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub price: Field<Value>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub roast: Field<Value>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub rating: Field<Value>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub description: Field<Value>,
}

/// A text field after sanitization.
///
/// Arrays and objects have no text form; they are kept so the validator can
/// report them instead of silently storing a stringified blob.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextValue {
    Text(String),
    NotText(Value),
}

impl TextValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TextValue::Text(s) => Some(s),
            TextValue::NotText(_) => None,
        }
    }
}

/// A sanitized, still sparse, product record.
///
/// Numeric fields hold `NaN` when the input could not be parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductDraft {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub name: Field<TextValue>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub origin: Field<TextValue>,
    #[serde(rename = "type", skip_serializing_if = "Field::is_absent")]
    pub kind: Field<TextValue>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub price: Field<f64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub roast: Field<TextValue>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub rating: Field<f64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub description: Field<TextValue>,
}
