//! In-memory implementation of PropertyRepository for testing and development

use crate::core::entity::Property;
use crate::core::query::{Page, Pageable, PropertyFilter};
use crate::core::repository::PropertyRepository;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Property>,
    last_id: i64,
}

/// In-memory property repository
///
/// Ids are assigned from a monotonically increasing counter starting at 1 and
/// never reused. Clones share the same table.
#[derive(Clone, Default)]
pub struct InMemoryPropertyRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-loaded with `properties`
    pub fn with_properties(properties: impl IntoIterator<Item = Property>) -> Self {
        let mut table = Table::default();
        for property in properties {
            insert(&mut table, property);
        }
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }
}

fn insert(table: &mut Table, mut property: Property) -> Property {
    let id = match property.id {
        Some(id) => id,
        None => table.last_id + 1,
    };
    table.last_id = table.last_id.max(id);
    property.id = Some(id);
    table.rows.insert(id, property.clone());
    property
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Property>> {
        let table = self
            .table
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(table.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Property>> {
        let table = self
            .table
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(table.rows.values().cloned().collect())
    }

    async fn find_all_by_filter(
        &self,
        filter: &PropertyFilter,
        pageable: &Pageable,
    ) -> Result<Page<Property>> {
        let matching: Vec<Property> = {
            let table = self
                .table
                .read()
                .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

            table
                .rows
                .values()
                .filter(|property| filter.matches(property))
                .cloned()
                .collect()
        };

        Ok(Page::from_unpaged(matching, pageable))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let table = self
            .table
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(table.rows.contains_key(&id))
    }

    async fn save(&self, property: Property) -> Result<Property> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(insert(&mut table, property))
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        table.rows.remove(&id);

        Ok(())
    }
}
