//! Runtime feature toggles.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Shared feature flags.
///
/// Clones share the same flags, so toggling one at runtime changes what every
/// session offers on its next main menu render.
#[derive(Debug, Clone)]
pub struct Features {
    custom_servers: Arc<AtomicBool>,
}

impl Features {
    /// Create flags with the custom servers feature on or off.
    pub fn new(custom_servers_enabled: bool) -> Self {
        Self { custom_servers: Arc::new(AtomicBool::new(custom_servers_enabled)) }
    }

    /// Players may keep their own server list and direct connect.
    pub fn custom_servers_enabled(&self) -> bool {
        self.custom_servers.load(Ordering::Relaxed)
    }

    /// Turn the custom servers feature on or off.
    pub fn set_custom_servers_enabled(&self, enabled: bool) {
        self.custom_servers.store(enabled, Ordering::Relaxed);
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::new(true)
    }
}
