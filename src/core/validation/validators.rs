//! Reusable field validators
//!
//! Each validator receives the field name and the raw JSON value (`Null` when
//! the field is absent) and returns the configured message on failure. Only
//! [`required`] and [`not_blank`] reject `null`; the others let it through so a
//! missing field reports a single "required" error.

use serde_json::Value;

/// Validator: field is present and not null
pub fn required(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| {
        if value.is_null() {
            Err(message.to_string())
        } else {
            Ok(())
        }
    }
}

/// Validator: field is a string with at least one non-whitespace character
pub fn not_blank(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| match value {
        Value::String(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(message.to_string()),
    }
}

/// Validator: value, when present, is a JSON number
pub fn number(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| {
        if value.is_null() || value.is_number() {
            Ok(())
        } else {
            Err(message.to_string())
        }
    }
}

/// Validator: number, when present, is at least `min`
pub fn min_value(
    min: f64,
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| match value.as_f64() {
        Some(num) if num < min => Err(message.to_string()),
        _ => Ok(()),
    }
}
