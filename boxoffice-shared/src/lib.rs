pub mod datetime;
pub mod models;

pub use models::{CatalogSnapshot, Event, EventId, Spot, SpotId, SpotStatus};
