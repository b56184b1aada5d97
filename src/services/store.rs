use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Location, NewLocation};

/// Errors that can occur when reading or writing locations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Location not found: {0}")]
    NotFound(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Persistence(err.to_string())
    }
}

/// Location persistence used by the HTTP layer and the search core
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Persist a new location and return its assigned id
    async fn create(&self, location: &NewLocation) -> Result<String, StoreError>;

    /// All locations whose category equals `category` exactly, in insertion order
    async fn list_by_category(&self, category: &str) -> Result<Vec<Location>, StoreError>;

    /// Fetch a single location; unknown or malformed ids are `NotFound`
    async fn get_by_id(&self, id: &str) -> Result<Location, StoreError>;

    /// Health check for the underlying storage
    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
