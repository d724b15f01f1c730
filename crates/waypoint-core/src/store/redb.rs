//! Redb-backed durable store implementation.
//!
//! Uses Redb's ACID transactions with Copy-on-Write for crash safety.
//! Every mutation rewrites the player's whole list inside one write
//! transaction, so a list is never observed half-updated.

use std::{path::Path, sync::Arc};

use redb::{Database, ReadableTable, TableDefinition};

use super::{CustomServerStore, StoreError};
use crate::{PlayerId, ServerEntry};

/// Table: `custom_servers`
/// Key: player id
/// Value: CBOR-encoded `Vec<ServerEntry>` in display order
const CUSTOM_SERVERS: TableDefinition<&str, &[u8]> = TableDefinition::new("custom_servers");

/// Durable store backed by Redb.
///
/// Thread-safe through Redb's internal locking. Clone is cheap (Arc).
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open or create a Redb database at the given path.
    ///
    /// Creates the custom server table if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the database cannot be opened or created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = Database::create(path.as_ref()).map_err(|e| StoreError::Io(e.to_string()))?;

        let txn = db.begin_write().map_err(|e| StoreError::Io(e.to_string()))?;
        {
            let _ = txn.open_table(CUSTOM_SERVERS).map_err(|e| StoreError::Io(e.to_string()))?;
        }
        txn.commit().map_err(|e| StoreError::Io(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Read-modify-write the player's list in a single transaction.
    ///
    /// The closure's error aborts the transaction without writing.
    fn modify<T>(
        &self,
        player: &PlayerId,
        f: impl FnOnce(&mut Vec<ServerEntry>) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let txn = self.db.begin_write().map_err(|e| StoreError::Io(e.to_string()))?;

        let result = {
            let mut table =
                txn.open_table(CUSTOM_SERVERS).map_err(|e| StoreError::Io(e.to_string()))?;

            let mut servers = match table
                .get(player.as_str())
                .map_err(|e| StoreError::Io(e.to_string()))?
            {
                Some(value) => decode_servers(value.value())?,
                None => Vec::new(),
            };

            let result = f(&mut servers)?;

            let bytes = encode_servers(&servers)?;
            table
                .insert(player.as_str(), bytes.as_slice())
                .map_err(|e| StoreError::Io(e.to_string()))?;

            result
        };

        txn.commit().map_err(|e| StoreError::Io(e.to_string()))?;

        Ok(result)
    }
}

impl CustomServerStore for RedbStore {
    fn get(&self, player: &PlayerId) -> Result<Vec<ServerEntry>, StoreError> {
        let txn = self.db.begin_read().map_err(|e| StoreError::Io(e.to_string()))?;

        let table = txn.open_table(CUSTOM_SERVERS).map_err(|e| StoreError::Io(e.to_string()))?;

        match table.get(player.as_str()).map_err(|e| StoreError::Io(e.to_string()))? {
            Some(value) => decode_servers(value.value()),
            None => Ok(Vec::new()),
        }
    }

    fn add(&self, player: &PlayerId, entry: ServerEntry) -> Result<(), StoreError> {
        self.modify(player, |servers| {
            servers.push(entry);
            Ok(())
        })
    }

    fn update(
        &self,
        player: &PlayerId,
        index: usize,
        entry: ServerEntry,
    ) -> Result<(), StoreError> {
        self.modify(player, |servers| {
            let len = servers.len();
            let slot = servers.get_mut(index).ok_or(StoreError::IndexOutOfRange { index, len })?;
            *slot = entry;
            Ok(())
        })
    }

    fn remove(&self, player: &PlayerId, entry: &ServerEntry) -> Result<bool, StoreError> {
        self.modify(player, |servers| match servers.iter().position(|e| e == entry) {
            Some(index) => {
                servers.remove(index);
                Ok(true)
            },
            None => Ok(false),
        })
    }
}

fn encode_servers(servers: &[ServerEntry]) -> Result<Vec<u8>, StoreError> {
    let mut bytes = Vec::new();
    ciborium::into_writer(servers, &mut bytes)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(bytes)
}

fn decode_servers(bytes: &[u8]) -> Result<Vec<ServerEntry>, StoreError> {
    ciborium::from_reader(bytes).map_err(|e| StoreError::Serialization(e.to_string()))
}
