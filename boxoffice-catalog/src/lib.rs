pub mod query;
pub mod reservation;
pub mod store;

#[cfg(test)]
pub(crate) mod fixtures;

pub use query::QueryService;
pub use reservation::ReservationEngine;
pub use store::{CatalogStore, SpotTable};
