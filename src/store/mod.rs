//! The data store seam.
//!
//! The engine treats persistence as an opaque read/write/subscribe
//! capability keyed by a hierarchical path; it depends on nothing about
//! the backing transport beyond "last full write wins per sport". The
//! host wires a real backend behind [`SportStore`]; [`MemoryStore`] is
//! the in-process reference implementation used in tests and demos.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::sport::{Sport, SportId};

pub use memory::MemoryStore;

/// Store key for a sport.
#[must_use]
pub fn sport_path(id: &SportId) -> String {
    format!("/sports/{id}")
}

/// Change notification emitted after every successful write.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoreEvent {
    pub sport_id: SportId,
    pub path: String,
}

/// Errors from a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no sport stored under {0}")]
    NotFound(SportId),

    #[error("store backend unavailable: {0}")]
    Unavailable(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Opaque read/write/subscribe capability over whole sports.
#[async_trait]
pub trait SportStore: Send + Sync {
    /// Read a sport by id. `None` when nothing is stored under the id.
    async fn read(&self, id: &SportId) -> StoreResult<Option<Sport>>;

    /// Write a sport whole. Last full write wins.
    async fn write(&self, sport: &Sport) -> StoreResult<()>;

    /// Subscribe to change notifications for every sport in the store.
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;
}
