use std::sync::Arc;

use boxoffice_catalog::{CatalogStore, QueryService, ReservationEngine};

#[derive(Clone)]
pub struct AppState {
    pub query: QueryService,
    pub reservations: ReservationEngine,
}

impl AppState {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self {
            query: QueryService::new(store.clone()),
            reservations: ReservationEngine::new(store),
        }
    }
}
