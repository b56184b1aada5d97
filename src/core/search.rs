use std::sync::Arc;
use thiserror::Error;

use crate::core::distance::haversine_distance;
use crate::models::{Coordinate, Location, SearchQuery, SearchResult};
use crate::services::{LocationStore, StoreError};

/// Errors that can occur during a radius search
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Location store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

/// Keep the candidates within `radius_km` of `origin`, annotated with their distance
///
/// The boundary is inclusive and candidate order is preserved.
pub fn filter_within_radius(
    origin: Coordinate,
    candidates: Vec<Location>,
    radius_km: f64,
) -> Vec<SearchResult> {
    candidates
        .into_iter()
        .filter_map(|location| {
            let distance = haversine_distance(
                origin.latitude,
                origin.longitude,
                location.latitude,
                location.longitude,
            );

            if distance <= radius_km {
                Some(SearchResult::from_location(location, distance))
            } else {
                None
            }
        })
        .collect()
}

/// Radius search over a single category
///
/// Linear scan: every location in the category is fetched and measured.
#[derive(Clone)]
pub struct ProximitySearch {
    store: Arc<dyn LocationStore>,
}

impl ProximitySearch {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, SearchError> {
        let candidates = self.store.list_by_category(&query.category).await?;
        let total_candidates = candidates.len();

        let results = filter_within_radius(query.origin, candidates, query.radius_km);

        tracing::debug!(
            "Search in {:?} within {} km kept {} of {} candidates",
            query.category,
            query.radius_km,
            results.len(),
            total_candidates
        );

        Ok(results)
    }
}
