use boxoffice_shared::{datetime, CatalogSnapshot, Event, EventId, Spot, SpotId, SpotStatus};

pub fn event(id: EventId) -> Event {
    Event {
        id,
        name: format!("Event {}", id),
        organization: "Test Org".to_string(),
        date: datetime::parse("2024-03-15T19:00:00").unwrap(),
        price: 5000,
        rating: "L".to_string(),
        image_url: "http://example.com/image.png".to_string(),
        created_at: datetime::parse("2024-01-01T10:00:00").unwrap(),
        location: "Main Hall".to_string(),
    }
}

pub fn spot(id: SpotId, name: &str, status: SpotStatus, event_id: EventId) -> Spot {
    Spot { id, name: name.to_string(), status, event_id }
}

/// Event 1: A1 available, A2 reserved, A3 available. Event 2: A1 available.
pub fn snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        events: vec![event(1), event(2)],
        spots: vec![
            spot(1, "A1", SpotStatus::Available, 1),
            spot(2, "A2", SpotStatus::Reserved, 1),
            spot(3, "A3", SpotStatus::Available, 1),
            spot(4, "A1", SpotStatus::Available, 2),
        ],
    }
}
