use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use boxoffice_core::{CatalogError, CatalogRepository};
use boxoffice_shared::{CatalogSnapshot, Event, EventId, Spot, SpotStatus};
use tokio::sync::RwLock;

/// The spot collection plus its `(event_id, name)` index.
///
/// Only status can change through this type; ids, names and event references
/// are fixed once the table is built.
#[derive(Debug)]
pub struct SpotTable {
    spots: Vec<Spot>,
    index: HashMap<EventId, HashMap<String, usize>>,
}

impl SpotTable {
    fn build(spots: Vec<Spot>) -> Result<Self, CatalogError> {
        let mut index: HashMap<EventId, HashMap<String, usize>> = HashMap::new();

        for (position, spot) in spots.iter().enumerate() {
            let names = index.entry(spot.event_id).or_default();
            if names.insert(spot.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateSpotName {
                    event_id: spot.event_id,
                    name: spot.name.clone(),
                });
            }
        }

        Ok(Self { spots, index })
    }

    pub fn find(&self, event_id: EventId, name: &str) -> Option<&Spot> {
        self.position(event_id, name).map(|i| &self.spots[i])
    }

    /// Flips a spot to `reserved`. Returns `false` if no such spot exists.
    pub fn mark_reserved(&mut self, event_id: EventId, name: &str) -> bool {
        match self.position(event_id, name) {
            Some(i) => {
                self.spots[i].status = SpotStatus::Reserved;
                true
            }
            None => false,
        }
    }

    pub fn for_event(&self, event_id: EventId) -> impl Iterator<Item = &Spot> {
        self.spots.iter().filter(move |s| s.event_id == event_id)
    }

    fn position(&self, event_id: EventId, name: &str) -> Option<usize> {
        self.index.get(&event_id).and_then(|names| names.get(name)).copied()
    }
}

/// In-memory catalog of events and spots, loaded once and shared by every request.
///
/// Spots sit behind a single collection-wide read-write lock. Readers run
/// concurrently; [`CatalogStore::with_spots_exclusive`] excludes readers and
/// other writers for the duration of its closure.
#[derive(Debug)]
pub struct CatalogStore {
    events: RwLock<Vec<Event>>,
    spots: RwLock<SpotTable>,
}

impl CatalogStore {
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self, CatalogError> {
        let CatalogSnapshot { events, spots } = snapshot;

        let mut event_ids = HashSet::with_capacity(events.len());
        for event in &events {
            if event.id <= 0 {
                return Err(CatalogError::InvalidEventId(event.id));
            }
            if !event_ids.insert(event.id) {
                return Err(CatalogError::DuplicateEventId(event.id));
            }
        }

        let mut spot_ids = HashSet::with_capacity(spots.len());
        for spot in &spots {
            if spot.id <= 0 {
                return Err(CatalogError::InvalidSpotId(spot.id));
            }
            if !spot_ids.insert(spot.id) {
                return Err(CatalogError::DuplicateSpotId(spot.id));
            }
            if !event_ids.contains(&spot.event_id) {
                return Err(CatalogError::OrphanSpot {
                    spot_id: spot.id,
                    event_id: spot.event_id,
                });
            }
        }

        Ok(Self {
            events: RwLock::new(events),
            spots: RwLock::new(SpotTable::build(spots)?),
        })
    }

    /// Runs `f` with exclusive access to the whole spot collection.
    ///
    /// `f` is synchronous, so the lock is never held across an await point.
    pub async fn with_spots_exclusive<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SpotTable) -> R,
    {
        let mut table = self.spots.write().await;
        f(&mut *table)
    }
}

#[async_trait]
impl CatalogRepository for CatalogStore {
    async fn list_events(&self) -> Vec<Event> {
        self.events.read().await.clone()
    }

    async fn get_event(&self, id: EventId) -> Option<Event> {
        self.events.read().await.iter().find(|e| e.id == id).cloned()
    }

    async fn list_spots(&self, event_id: EventId) -> Vec<Spot> {
        self.spots.read().await.for_event(event_id).cloned().collect()
    }
}
