//! Session registry.
//!
//! Tracks which players currently have a menu open. Registration hands out a
//! [`SessionGuard`]; dropping the guard deregisters the player, so a session
//! task that ends for any reason (handoff, disconnect, error, panic) never
//! leaves a stale entry behind.

#![allow(clippy::disallowed_types, reason = "Synchronous registry operations only")]

use std::{
    collections::HashSet,
    sync::{Arc, Mutex, PoisonError},
};

use waypoint_core::PlayerId;

/// Registry of players with an active menu session.
///
/// Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    active: Arc<Mutex<HashSet<PlayerId>>>,
}

impl SessionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session for `player`.
    ///
    /// Returns `None` if the player already has one (one menu per player).
    pub fn register(&self, player: PlayerId) -> Option<SessionGuard> {
        let inserted = self.lock().insert(player.clone());
        if !inserted {
            return None;
        }
        tracing::debug!(%player, "Session registered");
        Some(SessionGuard { registry: self.clone(), player })
    }

    /// Check if `player` has an active session.
    pub fn is_active(&self, player: &PlayerId) -> bool {
        self.lock().contains(player)
    }

    /// Number of active sessions.
    pub fn active_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<PlayerId>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Registration of one active session. Deregisters on drop.
#[derive(Debug)]
pub struct SessionGuard {
    registry: SessionRegistry,
    player: PlayerId,
}

impl SessionGuard {
    /// Player this session belongs to.
    pub fn player(&self) -> &PlayerId {
        &self.player
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.registry.lock().remove(&self.player);
        tracing::debug!(player = %self.player, "Session deregistered");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn guard_deregisters_on_drop() {
        let registry = SessionRegistry::new();
        let player = PlayerId::new("steve");

        let guard = registry.register(player.clone()).unwrap();
        assert!(registry.is_active(&player));
        assert_eq!(guard.player(), &player);

        drop(guard);
        assert!(!registry.is_active(&player));
        assert_eq!(registry.active_count(), 0);
    }

    #[test]
    fn one_session_per_player() {
        let registry = SessionRegistry::new();
        let _guard = registry.register(PlayerId::new("steve")).unwrap();

        assert!(registry.register(PlayerId::new("steve")).is_none());
        assert!(registry.register(PlayerId::new("alex")).is_some());
    }

    #[test]
    fn guard_deregisters_during_unwind() {
        let registry = SessionRegistry::new();
        let player = PlayerId::new("steve");

        let shared = registry.clone();
        let unwound = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = shared.register(PlayerId::new("steve")).unwrap();
            std::panic::resume_unwind(Box::new("session task crashed"));
        }));

        assert!(unwound.is_err());
        assert!(!registry.is_active(&player));
    }
}
