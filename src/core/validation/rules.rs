//! Per-type field rule sets

use crate::core::error::FieldError;
use serde_json::Value;
use std::sync::Arc;

type Validator = Arc<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

#[derive(Clone)]
struct FieldRule {
    field: &'static str,
    validators: Vec<Validator>,
}

/// Ordered set of validators keyed by JSON field name
///
/// ```rust,ignore
/// let rules = FieldRules::new()
///     .field("address", not_blank("Address is required"))
///     .field("price", required("Price is required"))
///     .field("price", min_value(0.0, "Price must be greater than 0"));
///
/// let errors = rules.validate(&payload);
/// ```
#[derive(Default, Clone)]
pub struct FieldRules {
    rules: Vec<FieldRule>,
}

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a validator to `field`
    ///
    /// Fields are checked in the order they were first mentioned.
    pub fn field<V>(mut self, field: &'static str, validator: V) -> Self
    where
        V: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        let validator: Validator = Arc::new(validator);
        match self.rules.iter_mut().find(|rule| rule.field == field) {
            Some(rule) => rule.validators.push(validator),
            None => self.rules.push(FieldRule {
                field,
                validators: vec![validator],
            }),
        }
        self
    }

    /// Names of the fields that carry at least one rule
    pub fn fields(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.field).collect()
    }

    /// Run every validator against `payload`
    ///
    /// A non-object payload is treated as an empty object, so every required
    /// field reports its error. Each failing validator yields one error.
    pub fn validate(&self, payload: &Value) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for rule in &self.rules {
            let value = payload.get(rule.field).unwrap_or(&Value::Null);
            for validator in &rule.validators {
                if let Err(message) = validator(rule.field, value) {
                    errors.push(FieldError::new(rule.field, message, value.clone()));
                }
            }
        }
        errors
    }
}
