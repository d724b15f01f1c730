//! Server error types.

use std::{io, path::PathBuf};

use thiserror::Error;
use waypoint_core::{PlayerId, StoreError};

use crate::ConfigError;

/// Errors that can occur in the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error.
    ///
    /// Fatal: prevents startup. Fix the configuration and restart.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The custom server store could not be opened.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// A data folder path could not be prepared.
    #[error("failed to prepare {path:?}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The player already has a menu open.
    #[error("player {0} already has an active session")]
    DuplicateSession(PlayerId),

    /// A session ended abnormally.
    ///
    /// Fatal for that session only.
    #[error("session for {player} failed: {message}")]
    Session {
        /// Player whose session failed.
        player: PlayerId,
        /// What went wrong.
        message: String,
    },
}
