use std::sync::Arc;

use boxoffice_core::{CatalogRepository, QueryError};
use boxoffice_shared::{Event, EventId, Spot};

/// Read-only lookups used by the listing endpoints.
#[derive(Clone)]
pub struct QueryService {
    catalog: Arc<dyn CatalogRepository>,
}

impl QueryService {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn list_events(&self) -> Vec<Event> {
        self.catalog.list_events().await
    }

    pub async fn get_event(&self, id: EventId) -> Result<Event, QueryError> {
        self.catalog
            .get_event(id)
            .await
            .ok_or(QueryError::EventNotFound(id))
    }

    /// Does not check that the event exists: an unknown id yields an empty list.
    pub async fn list_spots(&self, event_id: EventId) -> Vec<Spot> {
        self.catalog.list_spots(event_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::snapshot;
    use crate::store::CatalogStore;

    fn service() -> QueryService {
        let store = CatalogStore::from_snapshot(snapshot()).unwrap();
        QueryService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_get_event() {
        let service = service();

        assert_eq!(service.get_event(1).await.unwrap().id, 1);
        assert_eq!(service.get_event(5).await.unwrap_err(), QueryError::EventNotFound(5));
    }

    #[tokio::test]
    async fn test_missing_event_and_empty_spots_look_alike() {
        let service = service();

        assert!(service.list_spots(5).await.is_empty());
        assert_eq!(service.list_spots(2).await.len(), 1);
        assert_eq!(service.list_events().await.len(), 2);
    }
}
