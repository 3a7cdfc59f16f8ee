//! Persistence capability for properties

use crate::core::entity::Property;
use crate::core::query::{Page, Pageable, PropertyFilter};
use anyhow::Result;
use async_trait::async_trait;

/// Storage backend for [`Property`] records
///
/// Each call is independently atomic; nothing here composes calls into a
/// transaction. Implementations report failures as `anyhow` errors, which the
/// service layer surfaces as internal errors.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Get a property by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Property>>;

    /// Every stored property, ordered by id
    async fn find_all(&self) -> Result<Vec<Property>>;

    /// Properties matching `filter`, sorted and sliced per `pageable`
    async fn find_all_by_filter(
        &self,
        filter: &PropertyFilter,
        pageable: &Pageable,
    ) -> Result<Page<Property>>;

    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    /// Insert or replace
    ///
    /// A property without an id is inserted and receives a new one. A property
    /// with an id replaces the stored record with that id in full (or is
    /// inserted under it if absent). Returns the stored record.
    async fn save(&self, property: Property) -> Result<Property>;

    /// Remove the property with `id`; removing an absent id is a no-op
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}
