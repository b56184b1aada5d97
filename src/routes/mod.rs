// Route exports
pub mod errors;
pub mod locations;
pub mod trips;

use actix_web::web;
use std::sync::Arc;
use std::time::Instant;

use crate::core::ProximitySearch;
use crate::models::RequestPolicy;
use crate::services::{LocationStore, TripCostProvider};

pub use errors::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LocationStore>,
    pub search: ProximitySearch,
    pub trip_cost: Arc<dyn TripCostProvider>,
    pub request_policy: RequestPolicy,
}

impl AppState {
    pub fn new(
        store: Arc<dyn LocationStore>,
        trip_cost: Arc<dyn TripCostProvider>,
        request_policy: RequestPolicy,
    ) -> Self {
        Self {
            search: ProximitySearch::new(store.clone()),
            store,
            trip_cost,
            request_policy,
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(locations::configure)
        .configure(trips::configure);
}

/// Wall-clock nanoseconds since `start`, reported as `time_ns`
pub(crate) fn elapsed_ns(start: Instant) -> u64 {
    start.elapsed().as_nanos() as u64
}
