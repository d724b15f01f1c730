//! Generic runtime for one menu session.
//!
//! The Runtime drives the session loop, coordinating between:
//! - [`Menu`]: navigation state machine
//! - [`Transport`]: platform-specific I/O

use std::collections::VecDeque;

use waypoint_core::{CustomServerStore, ServerDirectory, ServerEntry};

use crate::{Menu, MenuAction, MenuError, RuntimeError, Transport, action::DISCONNECT_REASON};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player was handed off to a backend server.
    HandedOff(ServerEntry),
    /// The player was disconnected through the menu.
    Terminated {
        /// Reason sent to the player.
        reason: String,
    },
    /// The player went away while a screen was open.
    Abandoned,
}

/// Generic runtime that pumps a [`Menu`] through a [`Transport`].
///
/// # Type Parameters
///
/// - `T`: Platform-specific session I/O
/// - `D`: Server directory backing the official and Geyser lists
/// - `S`: Custom server store
pub struct Runtime<T, D, S>
where
    T: Transport,
    D: ServerDirectory,
    S: CustomServerStore,
{
    transport: T,
    menu: Menu<D, S>,
}

impl<T, D, S> Runtime<T, D, S>
where
    T: Transport,
    D: ServerDirectory,
    S: CustomServerStore,
{
    /// Create a runtime for one session.
    pub fn new(transport: T, menu: Menu<D, S>) -> Self {
        Self { transport, menu }
    }

    /// Run the session until handoff, termination or abandonment.
    ///
    /// This is the core orchestration loop that:
    /// 1. Starts the menu
    /// 2. Sends each screen through the transport and feeds the outcome back
    /// 3. Executes the final connect or disconnect
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails, or if the menu fails; in the
    /// latter case the player has already been disconnected.
    pub async fn run(mut self) -> Result<SessionEnd, RuntimeError<T::Error>> {
        let player = self.menu.player().clone();
        tracing::debug!(%player, "Session menu started");

        let mut actions: VecDeque<MenuAction> = match self.menu.start() {
            Ok(actions) => actions.into(),
            Err(e) => return Err(self.abort(e).await),
        };

        loop {
            let Some(action) = actions.pop_front() else {
                tracing::error!(%player, state = ?self.menu.state(), "Menu produced no action");
                return Err(RuntimeError::Stalled);
            };

            match action {
                MenuAction::Show(screen) => {
                    let outcome = self.transport.send_screen(screen).await.map_err(RuntimeError::Transport)?;
                    let Some(outcome) = outcome else {
                        tracing::debug!(%player, state = ?self.menu.state(), "Player left mid-menu");
                        return Ok(SessionEnd::Abandoned);
                    };
                    match self.menu.handle(outcome) {
                        Ok(next) => actions.extend(next),
                        Err(e) => return Err(self.abort(e).await),
                    }
                },
                MenuAction::Connect(server) => {
                    self.transport.connect(&server).await.map_err(RuntimeError::Transport)?;
                    tracing::info!(%player, %server, "Session handed off");
                    return Ok(SessionEnd::HandedOff(server));
                },
                MenuAction::Disconnect { reason } => {
                    self.transport.terminate(&reason).await.map_err(RuntimeError::Transport)?;
                    tracing::info!(%player, %reason, "Session terminated");
                    return Ok(SessionEnd::Terminated { reason });
                },
            }
        }
    }

    /// Disconnect the player after a menu failure.
    async fn abort(&mut self, error: MenuError) -> RuntimeError<T::Error> {
        tracing::error!(player = %self.menu.player(), %error, "Menu failed, ending session");
        if let Err(e) = self.transport.terminate(DISCONNECT_REASON).await {
            tracing::warn!(player = %self.menu.player(), error = %e, "Failed to disconnect after menu failure");
        }
        RuntimeError::Menu(error)
    }
}
