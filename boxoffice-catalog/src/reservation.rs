use std::collections::HashSet;
use std::sync::Arc;

use boxoffice_core::ReservationError;
use boxoffice_shared::EventId;
use tracing::{debug, info};

use crate::store::{CatalogStore, SpotTable};

/// Reserves batches of spots for a single event, all or nothing.
#[derive(Clone)]
pub struct ReservationEngine {
    store: Arc<CatalogStore>,
}

impl ReservationEngine {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Marks every spot in `spot_names` as reserved, or none of them.
    ///
    /// Validation and commit run inside one exclusive region of the store, so
    /// concurrent calls naming the same spot are serialized and only the first
    /// one to get the lock can succeed. Errors name the first offending spot in
    /// request order.
    pub async fn reserve(
        &self,
        event_id: EventId,
        spot_names: &[String],
    ) -> Result<(), ReservationError> {
        if spot_names.is_empty() {
            return Err(ReservationError::EmptyRequest);
        }

        let outcome = self
            .store
            .with_spots_exclusive(|table| reserve_batch(table, event_id, spot_names))
            .await;

        match &outcome {
            Ok(()) => info!(event_id, count = spot_names.len(), "Spots reserved"),
            Err(e) => debug!(event_id, error = %e, "Reservation rejected"),
        }

        outcome
    }
}

fn reserve_batch(
    table: &mut SpotTable,
    event_id: EventId,
    spot_names: &[String],
) -> Result<(), ReservationError> {
    // 1. Duplicates within the request
    let mut seen = HashSet::with_capacity(spot_names.len());
    for name in spot_names {
        if !seen.insert(name.as_str()) {
            return Err(ReservationError::DuplicateInRequest(name.clone()));
        }
    }

    // 2. Every name must exist and be available before anything is touched
    for name in spot_names {
        let spot = table
            .find(event_id, name)
            .ok_or_else(|| ReservationError::SpotNotFound {
                event_id,
                name: name.clone(),
            })?;

        if !spot.status.is_available() {
            return Err(ReservationError::SpotUnavailable(name.clone()));
        }
    }

    // 3. Commit
    for name in spot_names {
        table.mark_reserved(event_id, name);
    }

    Ok(())
}
