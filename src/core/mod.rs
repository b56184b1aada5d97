// Core algorithm exports
pub mod distance;
pub mod search;

pub use distance::haversine_distance;
pub use search::{filter_within_radius, ProximitySearch, SearchError};
