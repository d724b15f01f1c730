//! Menu navigation for Waypoint.
//!
//! This crate decouples what the player sees and does from how screens reach
//! them. The [`Menu`] is a pure state machine: it takes the player's
//! [`Outcome`] for the last [`Screen`] and returns [`MenuAction`]s. The
//! [`Runtime`] pumps a menu through any [`Transport`].
//!
//! # Components
//!
//! - [`Menu`]: Per-session state machine
//! - [`Screen`] / [`Outcome`]: What is shown and what comes back
//! - [`MenuAction`]: Show, connect or disconnect
//! - [`Features`]: Runtime toggles shared across sessions
//! - [`Transport`]: Trait for session I/O
//! - [`Runtime`]: Generic session loop

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod error;
mod features;
mod form;
mod menu;
mod outcome;
mod runtime;
mod screen;
mod state;
mod transport;

pub use action::{DISCONNECT_REASON, MenuAction};
pub use error::{MenuError, RuntimeError};
pub use features::Features;
pub use form::{SAMPLE_ADDRESS, SAMPLE_PORT};
pub use menu::Menu;
pub use outcome::{FieldValue, Outcome};
pub use runtime::{Runtime, SessionEnd};
pub use screen::{Button, FormField, Screen, ScreenKind};
pub use state::MenuState;
pub use transport::Transport;
