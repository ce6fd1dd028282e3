use serde::{Deserialize, Serialize};

use super::event::EventId;

pub type SpotId = i64;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpotStatus {
    Available,
    Reserved,
}

impl SpotStatus {
    pub fn is_available(self) -> bool {
        self == SpotStatus::Available
    }
}

/// A reservable seat. `name` is unique only within its event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    pub id: SpotId,
    pub name: String,
    pub status: SpotStatus,
    pub event_id: EventId,
}
