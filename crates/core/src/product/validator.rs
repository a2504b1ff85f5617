//! Field rules for sanitized product records.
//!
//! Every rule runs; the report lists all violations in field order
//! name, price, rating, origin, type, roast, description.

use serde::Serialize;

use super::{Field, ProductDraft, TextValue, MAX_NAME_LENGTH, MAX_PRICE, MAX_RATING, MIN_RATING};
use crate::error::CoreError;

/// Whether missing fields are errors (create) or allowed (partial update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update,
}

impl ValidationMode {
    fn skips_absent(self) -> bool {
        self == ValidationMode::Update
    }
}

/// Outcome of validating one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Convert into a `Result`, carrying the messages on failure.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.valid {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(self.errors))
        }
    }
}

/// Check every field rule against `draft`.
pub fn validate(draft: &ProductDraft, mode: ValidationMode) -> ValidationReport {
    let mut errors = Vec::new();

    check_name(&draft.name, mode, &mut errors);
    check_price(&draft.price, mode, &mut errors);
    check_rating(&draft.rating, &mut errors);
    check_text("Origin", &draft.origin, &mut errors);
    check_text("Type", &draft.kind, &mut errors);
    check_text("Roast", &draft.roast, &mut errors);
    check_text("Description", &draft.description, &mut errors);

    ValidationReport::from_errors(errors)
}

fn check_name(name: &Field<TextValue>, mode: ValidationMode, errors: &mut Vec<String>) {
    if mode.skips_absent() && name.is_absent() {
        return;
    }
    // An empty string counts as missing. Sanitized names are trimmed, so the
    // whitespace rule only fires for drafts built without `sanitize`.
    match name.value().and_then(TextValue::as_str) {
        None | Some("") => errors.push("Name is required and must be a string".into()),
        Some(s) if s.trim().is_empty() => {
            errors.push("Name cannot be empty or only whitespace".into());
        }
        // Length is measured in UTF-16 code units, as browser clients count it.
        Some(s) if s.encode_utf16().count() > MAX_NAME_LENGTH => {
            errors.push(format!("Name cannot exceed {MAX_NAME_LENGTH} characters"));
        }
        Some(_) => {}
    }
}

fn check_price(price: &Field<f64>, mode: ValidationMode, errors: &mut Vec<String>) {
    if mode.skips_absent() && price.is_absent() {
        return;
    }
    let price = price.value().copied().unwrap_or(f64::NAN);
    if price.is_nan() {
        errors.push("Price must be a valid number".into());
    } else if price < 0.0 {
        errors.push("Price cannot be negative".into());
    } else if price > MAX_PRICE {
        errors.push("Price cannot exceed 999,999.99".into());
    }
}

/// Rating is optional in both modes; only a set value is checked.
fn check_rating(rating: &Field<f64>, errors: &mut Vec<String>) {
    let Some(&rating) = rating.value() else {
        return;
    };
    if rating.is_nan() {
        errors.push("Rating must be a valid number".into());
    } else if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        errors.push("Rating must be between 0 and 5".into());
    }
}

fn check_text(label: &str, field: &Field<TextValue>, errors: &mut Vec<String>) {
    if let Field::Value(TextValue::NotText(_)) = field {
        errors.push(format!("{label} must be a string"));
    }
}
