//! Nearby Locations - location storage and proximity search service
//!
//! Stores points of interest by category and answers radius searches using
//! the haversine great-circle distance. Trip cost estimates are delegated to
//! an external tolling provider.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{haversine_distance, filter_within_radius, ProximitySearch, SearchError};
pub use models::{Location, NewLocation, Coordinate, SearchQuery, SearchResult, TripCost};
pub use routes::{configure_routes, AppState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let origin = Coordinate::new(40.7128, -74.0060);
        assert_eq!(haversine_distance(origin.latitude, origin.longitude, 40.7128, -74.0060), 0.0);
    }
}
