// Service exports
pub mod memory;
pub mod postgres;
pub mod store;
pub mod tollguru;
pub mod trip_cost;

pub use memory::MemoryLocationStore;
pub use postgres::PostgresLocationStore;
pub use store::{LocationStore, StoreError};
pub use tollguru::TollGuruClient;
pub use trip_cost::{TripCostProvider, TripCostError};
