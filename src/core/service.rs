//! Property business rules
//!
//! The service sits between the HTTP handlers and the repository. It checks
//! identity rules (creation must not carry an id, updates must not contradict
//! the path id, referenced ids must exist) and raises [`AppError`]s that
//! propagate unchanged to the response layer.

use crate::core::entity::Property;
use crate::core::error::{AppError, AppResult};
use crate::core::query::{Page, Pageable, PropertyFilter};
use crate::core::repository::PropertyRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Operations exposed to the HTTP layer
#[async_trait]
pub trait PropertyService: Send + Sync {
    /// Every stored property, ordered by id
    async fn get_all(&self) -> AppResult<Vec<Property>>;

    /// Fails with `NotFound` if no property has `id`
    async fn get_by_id(&self, id: i64) -> AppResult<Property>;

    /// Persist a new property
    ///
    /// Fails with `BadRequest` if the property already carries an id.
    async fn save(&self, property: Property) -> AppResult<Property>;

    /// Replace the property stored under `id`
    ///
    /// Fails with `BadRequest` if `property.id` is set and differs from `id`,
    /// and with `NotFound` if `id` does not exist.
    async fn update(&self, id: i64, property: Property) -> AppResult<Property>;

    /// Fails with `NotFound` if no property has `id`
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Filtered, sorted and paginated listing
    async fn get_paginated_properties(
        &self,
        filter: &PropertyFilter,
        pageable: &Pageable,
    ) -> AppResult<Page<Property>>;
}

/// Production [`PropertyService`] over any [`PropertyRepository`]
#[derive(Clone)]
pub struct PropertyServiceImpl {
    repository: Arc<dyn PropertyRepository>,
}

impl PropertyServiceImpl {
    pub fn new(repository: Arc<dyn PropertyRepository>) -> Self {
        Self { repository }
    }

    pub fn from_repository(repository: impl PropertyRepository + 'static) -> Self {
        Self::new(Arc::new(repository))
    }

    async fn ensure_exists(&self, id: i64) -> AppResult<()> {
        if self.repository.exists_by_id(id).await? {
            Ok(())
        } else {
            tracing::warn!(id, "property not found");
            Err(AppError::property_not_found(id))
        }
    }
}

#[async_trait]
impl PropertyService for PropertyServiceImpl {
    async fn get_all(&self) -> AppResult<Vec<Property>> {
        tracing::debug!("listing all properties");
        Ok(self.repository.find_all().await?)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Property> {
        tracing::debug!(id, "fetching property");
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(id, "property not found");
            AppError::property_not_found(id)
        })
    }

    async fn save(&self, property: Property) -> AppResult<Property> {
        if let Some(id) = property.id {
            tracing::warn!(id, "rejected create with explicit id");
            return Err(AppError::bad_request(format!(
                "Cannot create property with id {}",
                id
            )));
        }

        let created = self.repository.save(property).await?;
        tracing::info!(id = ?created.id, "property created");
        Ok(created)
    }

    async fn update(&self, id: i64, mut property: Property) -> AppResult<Property> {
        if property.id.is_some_and(|body_id| body_id != id) {
            tracing::warn!(id, body_id = ?property.id, "path and body ids differ");
            return Err(AppError::bad_request(
                "The id property is not equals to param id",
            ));
        }
        self.ensure_exists(id).await?;

        property.id = Some(id);
        let updated = self.repository.save(property).await?;
        tracing::info!(id, "property updated");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.ensure_exists(id).await?;
        self.repository.delete_by_id(id).await?;
        tracing::info!(id, "property deleted");
        Ok(())
    }

    async fn get_paginated_properties(
        &self,
        filter: &PropertyFilter,
        pageable: &Pageable,
    ) -> AppResult<Page<Property>> {
        tracing::debug!(?filter, page = pageable.page, size = pageable.size, "listing properties");
        Ok(self.repository.find_all_by_filter(filter, pageable).await?)
    }
}
