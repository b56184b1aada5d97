use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Coordinate, TripCost};

/// Errors that can occur when estimating a trip cost
#[derive(Debug, Error)]
pub enum TripCostError {
    #[error("Trip cost provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Invalid response from trip cost provider: {0}")]
    ProviderResponseInvalid(String),

    #[error("Trip cost provider not configured: {0}")]
    NotConfigured(String),
}

impl From<reqwest::Error> for TripCostError {
    fn from(err: reqwest::Error) -> Self {
        TripCostError::ProviderUnavailable(err.to_string())
    }
}

/// External fuel and toll cost estimation
#[async_trait]
pub trait TripCostProvider: Send + Sync {
    async fn estimate(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<TripCost, TripCostError>;
}
