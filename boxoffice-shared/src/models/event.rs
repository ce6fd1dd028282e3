use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type EventId = i64;

/// A scheduled event. Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub organization: String,
    #[serde(with = "crate::datetime")]
    pub date: NaiveDateTime,
    /// Smallest currency unit.
    pub price: i64,
    pub rating: String,
    pub image_url: String,
    #[serde(with = "crate::datetime")]
    pub created_at: NaiveDateTime,
    pub location: String,
}
