//! Menu side-effects.
//!
//! This module defines the [`MenuAction`] enum, which represents instructions
//! produced by the [`crate::Menu`] state machine for the runtime to execute.

use waypoint_core::ServerEntry;

use crate::Screen;

/// Disconnect reason sent when the player leaves through the menu.
pub const DISCONNECT_REASON: &str = "disconnectionScreen.disconnected";

/// Actions produced by the Menu state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Send a screen and feed the player's response back to the menu.
    Show(Screen),

    /// Hand the session off to a backend server. The menu is finished.
    Connect(ServerEntry),

    /// End the session. The menu is finished.
    Disconnect {
        /// Reason shown on the client's disconnect screen.
        reason: String,
    },
}
