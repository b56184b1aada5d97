use serde::{Deserialize, Serialize};
use crate::models::domain::{Location, SearchResult, TripCost};

/// Response for location creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLocationResponse {
    pub id: String,
    pub time_ns: u64,
}

/// Response for category listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<Location>,
    pub time_ns: u64,
}

/// Response for radius search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub locations: Vec<SearchResult>,
    pub time_ns: u64,
}

/// Response for trip cost estimation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripCostResponse {
    pub total_cost: f64,
    pub fuel_cost: f64,
    pub toll_cost: f64,
    pub time_ns: u64,
}

impl TripCostResponse {
    pub fn new(cost: TripCost, time_ns: u64) -> Self {
        Self {
            total_cost: cost.total_cost,
            fuel_cost: cost.fuel_cost,
            toll_cost: cost.toll_cost,
            time_ns,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
