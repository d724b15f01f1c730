//! Transport trait for abstracting session I/O.
//!
//! The [`Transport`] trait decouples the menu runtime from how screens reach
//! the player. A proxy implements it on top of its form protocol, the console
//! binary implements it over stdin/stdout, and tests implement it with a
//! script of outcomes. The generic [`crate::Runtime`] handles all
//! orchestration.

use std::future::Future;

use waypoint_core::ServerEntry;

use crate::{Outcome, Screen};

/// Abstracts one player session.
///
/// Exactly one screen is outstanding at a time: the runtime awaits
/// [`send_screen`](Transport::send_screen) before producing the next one.
pub trait Transport: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Show a screen and wait for the player's response.
    ///
    /// Returns `None` if the player disconnected before responding.
    ///
    /// # Errors
    ///
    /// Returns an error if the screen could not be delivered.
    fn send_screen(
        &mut self,
        screen: Screen,
    ) -> impl Future<Output = Result<Option<Outcome>, Self::Error>> + Send;

    /// Hand the session off to a backend server.
    ///
    /// # Errors
    ///
    /// Returns an error if the handoff could not be started.
    fn connect(&mut self, server: &ServerEntry) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Disconnect the player with `reason`.
    ///
    /// # Errors
    ///
    /// Returns an error if the disconnect could not be sent.
    fn terminate(&mut self, reason: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
