use boxoffice_shared::{EventId, SpotId};

/// Problems found while building the catalog from its startup snapshot.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Event id must be positive, got {0}")]
    InvalidEventId(EventId),

    #[error("Duplicate event id: {0}")]
    DuplicateEventId(EventId),

    #[error("Spot id must be positive, got {0}")]
    InvalidSpotId(SpotId),

    #[error("Duplicate spot id: {0}")]
    DuplicateSpotId(SpotId),

    #[error("Spot {spot_id} references unknown event {event_id}")]
    OrphanSpot { spot_id: SpotId, event_id: EventId },

    #[error("Spot name {name} appears more than once for event {event_id}")]
    DuplicateSpotName { event_id: EventId, name: String },
}

/// Why a batch reservation was rejected. No spot changed state in any of these cases.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReservationError {
    #[error("No spots requested")]
    EmptyRequest,

    #[error("Spot {0} is listed more than once in the request")]
    DuplicateInRequest(String),

    #[error("Spot {name} not found for event {event_id}")]
    SpotNotFound { event_id: EventId, name: String },

    #[error("Spot {0} is already reserved")]
    SpotUnavailable(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Event not found: {0}")]
    EventNotFound(EventId),
}
