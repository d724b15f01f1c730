//! Storage abstraction for per-player custom server lists
//!
//! Trait-based abstraction over the keyed store that persists each player's
//! custom servers. The trait is synchronous (no async): every operation is a
//! short, self-contained transaction, and callers already run on the session's
//! own task.

mod chaotic;
mod error;
mod memory;
mod redb;

pub use chaotic::ChaoticStore;
pub use error::StoreError;
pub use memory::MemoryStore;

pub use self::redb::RedbStore;
use crate::{PlayerId, ServerEntry};

/// Per-player ordered list of custom servers.
///
/// Must be Clone (each session gets a handle), Send + Sync (sessions run on
/// different tasks), and synchronous. Implementations share internal state via
/// Arc, so clones access the same underlying store.
///
/// # Invariants
///
/// - Insertion order is display order.
/// - A position returned by [`get`](Self::get) is only meaningful until the
///   next mutation for that player.
pub trait CustomServerStore: Clone + Send + Sync + 'static {
    /// Current list for `player`. Empty if the player never stored anything.
    fn get(&self, player: &PlayerId) -> Result<Vec<ServerEntry>, StoreError>;

    /// Append `entry` to the end of the player's list.
    fn add(&self, player: &PlayerId, entry: ServerEntry) -> Result<(), StoreError>;

    /// Replace the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` if `index` is past the end.
    fn update(&self, player: &PlayerId, index: usize, entry: ServerEntry)
    -> Result<(), StoreError>;

    /// Remove the first entry equal to `entry`.
    ///
    /// Returns `false` if no such entry exists (already removed).
    fn remove(&self, player: &PlayerId, entry: &ServerEntry) -> Result<bool, StoreError>;

    /// Current position of `entry` in the player's list. `None` if absent.
    fn index_of(&self, player: &PlayerId, entry: &ServerEntry) -> Result<Option<usize>, StoreError> {
        Ok(self.get(player)?.iter().position(|e| e == entry))
    }
}
