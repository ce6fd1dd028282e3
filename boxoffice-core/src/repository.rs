use async_trait::async_trait;
use boxoffice_shared::{Event, EventId, Spot};

/// Read access to the catalog. Results are owned snapshots; callers never hold a lock.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All events in load order.
    async fn list_events(&self) -> Vec<Event>;

    async fn get_event(&self, id: EventId) -> Option<Event>;

    /// Spots whose event reference equals `event_id`, in load order.
    /// Empty when nothing matches, whether or not the event exists.
    async fn list_spots(&self, event_id: EventId) -> Vec<Spot>;
}
