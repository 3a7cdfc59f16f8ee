//! The `Property` entity and its untrusted input representation

use crate::core::validation::validators::{min_value, not_blank, number, required};
use crate::core::validation::{FieldRules, ValidatedInput};
use serde::{Deserialize, Serialize};

/// A real-estate property listing
///
/// `id` is `None` until the store assigns one on creation. Once persisted it
/// never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: Option<i64>,
    pub address: String,
    pub price: f64,
    pub size: f64,
    pub description: Option<String>,
}

impl Property {
    /// A not-yet-persisted property
    pub fn new(
        address: impl Into<String>,
        price: f64,
        size: f64,
        description: Option<String>,
    ) -> Self {
        Self {
            id: None,
            address: address.into(),
            price,
            size,
            description,
        }
    }

    /// Same property carrying an explicit identity
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether the address contains `needle`, ignoring case
    pub fn address_contains(&self, needle: &str) -> bool {
        self.address.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Request body for `POST /properties` and `PUT /properties/{id}`
///
/// Only deserialized after the raw JSON passed its field rules (see
/// [`ValidatedInput`](crate::core::validation::ValidatedInput)), so the
/// required fields are known to be present and well-typed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInput {
    #[serde(default)]
    pub id: Option<i64>,
    pub address: String,
    pub price: f64,
    pub size: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl ValidatedInput for PropertyInput {
    fn rules() -> FieldRules {
        FieldRules::new()
            .field("address", not_blank("Address is required"))
            .field("price", required("Price is required"))
            .field("price", number("Price must be a number"))
            .field("price", min_value(0.0, "Price must be greater than 0"))
            .field("size", required("Size is required"))
            .field("size", number("Size must be a number"))
            .field("size", min_value(1.0, "Size must be greater than 0"))
    }
}
