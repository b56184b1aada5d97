use serde::{Deserialize, Serialize};

/// Stored point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
}

impl Location {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A location before the store has assigned it an id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewLocation {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
}

impl NewLocation {
    pub fn with_id(self, id: String) -> Location {
        Location {
            id,
            name: self.name,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
            category: self.category,
        }
    }
}

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Radius search parameters
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub origin: Coordinate,
    pub category: String,
    pub radius_km: f64,
}

/// Location matched by a radius search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub address: String,
    pub category: String,
    /// Great-circle distance from the query point in kilometers
    pub distance: f64,
}

impl SearchResult {
    pub fn from_location(location: Location, distance: f64) -> Self {
        Self {
            id: location.id,
            name: location.name,
            address: location.address,
            category: location.category,
            distance,
        }
    }
}

/// Trip cost estimate reported by the external provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripCost {
    pub total_cost: f64,
    pub fuel_cost: f64,
    pub toll_cost: f64,
}
