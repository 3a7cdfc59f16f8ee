//! Input to entity mapping

use crate::core::entity::{Property, PropertyInput};

/// Turn a request body into an entity
///
/// The id is carried over only when the input has one, so create requests
/// produce an unsaved entity and update requests keep the caller's id for the
/// service to check against the path.
pub fn to_property(input: PropertyInput) -> Property {
    let property = Property::new(input.address, input.price, input.size, input.description);
    match input.id {
        Some(id) => property.with_id(id),
        None => property,
    }
}
