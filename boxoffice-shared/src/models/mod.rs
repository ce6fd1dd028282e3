pub mod event;
pub mod snapshot;
pub mod spot;

pub use event::{Event, EventId};
pub use snapshot::CatalogSnapshot;
pub use spot::{Spot, SpotId, SpotStatus};
