//! Normalization of raw product bodies.
//!
//! Sanitization is total: it never rejects input. Values that cannot be
//! coerced are carried in a form the validator reports on (`NaN` for
//! numbers, [`TextValue::NotText`] for text).

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{Field, ProductDraft, ProductInput, TextValue, DEFAULT_DESCRIPTION};

/// Leading decimal literal, the way lenient numeric parsing reads it:
/// `"12.5kg"` is 12.5, `".5"` is 0.5, `"1e3"` is 1000.
static DECIMAL_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("valid regex")
});

/// Normalize a raw product body into a sparse draft.
///
/// Only keys present in `raw` are present in the result.
pub fn sanitize(raw: &ProductInput) -> ProductDraft {
    ProductDraft {
        name: sanitize_text(&raw.name),
        origin: sanitize_text(&raw.origin),
        kind: sanitize_text(&raw.kind),
        price: match &raw.price {
            Field::Absent => Field::Absent,
            // A null price is a number that failed to parse.
            Field::Null => Field::Value(f64::NAN),
            Field::Value(v) => Field::Value(parse_decimal(v)),
        },
        roast: sanitize_text(&raw.roast),
        rating: raw.rating.as_ref().map(parse_decimal),
        description: match &raw.description {
            Field::Absent => Field::Absent,
            Field::Null => Field::Value(TextValue::Text(DEFAULT_DESCRIPTION.to_string())),
            Field::Value(v) if is_falsy(v) => {
                Field::Value(TextValue::Text(DEFAULT_DESCRIPTION.to_string()))
            }
            Field::Value(v) => Field::Value(to_text(v)),
        },
    }
}

fn sanitize_text(field: &Field<Value>) -> Field<TextValue> {
    field.as_ref().map(to_text)
}

/// Render a scalar as trimmed text.
fn to_text(value: &Value) -> TextValue {
    match value {
        Value::String(s) => TextValue::Text(s.trim().to_string()),
        Value::Number(_) | Value::Bool(_) => TextValue::Text(coerce_to_string(value)),
        Value::Null | Value::Array(_) | Value::Object(_) => TextValue::NotText(value.clone()),
    }
}

/// String form of any JSON value as browser clients stringify it: integral
/// floats drop the `.0`, arrays join their elements with commas.
fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(coerce_to_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Parse a JSON value as a decimal number, `NaN` if it has none.
pub fn parse_decimal(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_decimal_prefix(s),
        // `[5]` reads as "5", `["7.5", 1]` as "7.5,1".
        Value::Array(_) => parse_decimal_prefix(&coerce_to_string(value)),
        Value::Null | Value::Bool(_) | Value::Object(_) => f64::NAN,
    }
}

/// Parse the leading decimal literal of `s`, ignoring leading whitespace and
/// any trailing garbage.
pub fn parse_decimal_prefix(s: &str) -> f64 {
    let Some(m) = DECIMAL_PREFIX_RE.find(s.trim_start()) else {
        return f64::NAN;
    };
    let literal = m.as_str();
    match literal {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => literal.parse().unwrap_or(f64::NAN),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
