//! Custom server store chosen by configuration.

use waypoint_core::{CustomServerStore, MemoryStore, PlayerId, RedbStore, ServerEntry, StoreError};

/// Either store backend, picked at startup from `custom_servers.storage`.
#[derive(Clone)]
pub enum ConfiguredStore {
    /// Lost on restart.
    Memory(MemoryStore),
    /// Persisted to a redb file.
    Redb(RedbStore),
}

impl CustomServerStore for ConfiguredStore {
    fn get(&self, player: &PlayerId) -> Result<Vec<ServerEntry>, StoreError> {
        match self {
            Self::Memory(store) => store.get(player),
            Self::Redb(store) => store.get(player),
        }
    }

    fn add(&self, player: &PlayerId, entry: ServerEntry) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.add(player, entry),
            Self::Redb(store) => store.add(player, entry),
        }
    }

    fn update(&self, player: &PlayerId, index: usize, entry: ServerEntry) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.update(player, index, entry),
            Self::Redb(store) => store.update(player, index, entry),
        }
    }

    fn remove(&self, player: &PlayerId, entry: &ServerEntry) -> Result<bool, StoreError> {
        match self {
            Self::Memory(store) => store.remove(player, entry),
            Self::Redb(store) => store.remove(player, entry),
        }
    }
}
