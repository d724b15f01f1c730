#![allow(clippy::disallowed_types, reason = "Synchronous in-memory operations only")]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use super::{CustomServerStore, StoreError};
use crate::{PlayerId, ServerEntry};

/// In-memory store for testing and ephemeral deployments
///
/// All state is wrapped in Arc<Mutex<>> to allow Clone and concurrent access.
/// A poisoned mutex is recovered rather than propagated: every mutation is a
/// single Vec operation, so the data is never left half-written.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<PlayerId, Vec<ServerEntry>>>>,
}

impl MemoryStore {
    /// Create a new empty `MemoryStore`
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of players with a stored list.
    ///
    /// Useful for debugging and testing.
    pub fn player_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PlayerId, Vec<ServerEntry>>> {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl CustomServerStore for MemoryStore {
    fn get(&self, player: &PlayerId) -> Result<Vec<ServerEntry>, StoreError> {
        Ok(self.lock().get(player).cloned().unwrap_or_default())
    }

    fn add(&self, player: &PlayerId, entry: ServerEntry) -> Result<(), StoreError> {
        self.lock().entry(player.clone()).or_default().push(entry);
        Ok(())
    }

    fn update(
        &self,
        player: &PlayerId,
        index: usize,
        entry: ServerEntry,
    ) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let servers = inner.entry(player.clone()).or_default();
        let len = servers.len();

        match servers.get_mut(index) {
            Some(slot) => {
                *slot = entry;
                Ok(())
            },
            None => Err(StoreError::IndexOutOfRange { index, len }),
        }
    }

    fn remove(&self, player: &PlayerId, entry: &ServerEntry) -> Result<bool, StoreError> {
        let mut inner = self.lock();
        let Some(servers) = inner.get_mut(player) else {
            return Ok(false);
        };

        match servers.iter().position(|e| e == entry) {
            Some(index) => {
                servers.remove(index);
                Ok(true)
            },
            None => Ok(false),
        }
    }
}
