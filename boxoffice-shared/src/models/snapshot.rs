use serde::Deserialize;

use super::{Event, Spot};

/// Startup document: `{"events": [...], "spots": [...]}`. Both keys are required.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSnapshot {
    pub events: Vec<Event>,
    pub spots: Vec<Spot>,
}
