//! Store error types.
//!
//! Defines errors that can occur during custom server store operations:
//! - `IndexOutOfRange`: Update targeted a position past the end of the list
//! - `Serialization`: Failed to encode/decode a stored list
//! - `Io`: Underlying storage system errors

use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Update index past the end of the player's list
    ///
    /// The list changed between render and submit (another session for the
    /// same player removed entries).
    #[error("index {index} out of range for list of {len} servers")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Current list length
        len: usize,
    },

    /// Serialization or deserialization failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error (file system, database, etc.)
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}
