//! Menu error types.

use thiserror::Error;
use waypoint_core::StoreError;

/// Errors that abort menu navigation.
///
/// Player mistakes (closing forms, bad input) are navigation, not errors.
/// Only collaborator failures end up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// The custom server store failed to read or persist.
    #[error("custom server store failed: {0}")]
    Store(#[from] StoreError),
}

/// Errors that end a session runtime.
#[derive(Error, Debug)]
pub enum RuntimeError<E: std::error::Error + 'static> {
    /// The transport failed to deliver a screen or hand the session off.
    #[error("transport error: {0}")]
    Transport(#[source] E),

    /// The menu failed; the session has been terminated.
    #[error("menu error: {0}")]
    Menu(#[from] MenuError),

    /// The menu stopped producing actions before the session ended.
    ///
    /// Indicates a bug in the menu state machine.
    #[error("menu stalled without ending the session")]
    Stalled,
}
