// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Location, NewLocation, Coordinate, SearchQuery, SearchResult, TripCost};
pub use requests::{CreateLocationRequest, SearchRequest, TripCostRequest, RequestPolicy, DecodeError, decode_request};
pub use responses::{CreateLocationResponse, LocationsResponse, SearchResponse, TripCostResponse, HealthResponse, ErrorResponse};
