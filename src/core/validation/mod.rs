//! Request body validation
//!
//! Bodies are validated as raw JSON against a [`FieldRules`] set before they are
//! deserialized, so a missing or mistyped field is reported as a field error
//! with the value that was actually sent instead of a serde failure.

pub mod extractor;
pub mod rules;
pub mod validators;

pub use extractor::ValidatedJson;
pub use rules::FieldRules;

use serde::de::DeserializeOwned;

/// Types that can be deserialized from a validated request body
pub trait ValidatedInput: DeserializeOwned {
    /// Field rules the raw JSON must satisfy
    fn rules() -> FieldRules;
}
