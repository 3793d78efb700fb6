//! In-memory reference implementation of the store seam.

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use tokio::sync::{broadcast, RwLock};

use crate::sport::{Sport, SportId};

use super::{sport_path, SportStore, StoreError, StoreEvent, StoreResult};

const EVENT_CAPACITY: usize = 64;

/// Whole-sport key-value store backed by a map. Writes take the write
/// lock, so at most one mutation per store is in flight at a time.
pub struct MemoryStore {
    sports: RwLock<HashMap<SportId, Sport>>,
    events: broadcast::Sender<StoreEvent>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            sports: RwLock::new(HashMap::new()),
            events,
        }
    }

    /// Read-modify-write one sport under the write lock. This is the
    /// serialization point the engine's concurrency model assumes: two
    /// admins scoring the same sport are applied one after the other,
    /// each against the latest snapshot.
    pub async fn with_sport<F, T>(&self, id: &SportId, mutate: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Sport) -> T,
    {
        let mut sports = self.sports.write().await;
        let sport = sports.get_mut(id).ok_or(StoreError::NotFound(*id))?;
        let out = mutate(sport);
        self.notify(id);
        Ok(out)
    }

    fn notify(&self, id: &SportId) {
        // A send error only means nobody is subscribed.
        let _ = self.events.send(StoreEvent {
            sport_id: *id,
            path: sport_path(id),
        });
        debug!("store notified for {}", sport_path(id));
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SportStore for MemoryStore {
    async fn read(&self, id: &SportId) -> StoreResult<Option<Sport>> {
        Ok(self.sports.read().await.get(id).cloned())
    }

    async fn write(&self, sport: &Sport) -> StoreResult<()> {
        self.sports.write().await.insert(sport.id, sport.clone());
        self.notify(&sport.id);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
