use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Location, NewLocation};
use crate::services::store::{LocationStore, StoreError};

/// In-process location store
///
/// Keeps locations in insertion order. Used for local runs without
/// PostgreSQL and as the store behind the HTTP tests.
#[derive(Debug, Default)]
pub struct MemoryLocationStore {
    locations: RwLock<Vec<Location>>,
}

impl MemoryLocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.locations.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.locations.read().await.is_empty()
    }
}

#[async_trait]
impl LocationStore for MemoryLocationStore {
    async fn create(&self, location: &NewLocation) -> Result<String, StoreError> {
        let id = uuid::Uuid::new_v4().to_string();
        self.locations
            .write()
            .await
            .push(location.clone().with_id(id.clone()));

        tracing::debug!("Stored location {} in category {:?}", id, location.category);

        Ok(id)
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Location>, StoreError> {
        let locations = self.locations.read().await;

        Ok(locations
            .iter()
            .filter(|l| l.category == category)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Location, StoreError> {
        self.locations
            .read()
            .await
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
