//! Chaotic store wrapper for fault injection testing
//!
//! Store wrapper that randomly fails operations to test error handling in the
//! menu engine and session runtime. A failed operation never reaches the
//! underlying store.

#![allow(clippy::disallowed_types, reason = "Locking simple RNG state")]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use super::{CustomServerStore, StoreError};
use crate::{PlayerId, ServerEntry};

/// Chaotic store wrapper that randomly injects failures
///
/// Delegates to an underlying store but randomly fails operations based on a
/// configured failure rate. Uses Arc<Mutex<>> for the RNG state, making it
/// Clone and thread-safe.
#[derive(Clone)]
pub struct ChaoticStore<S: CustomServerStore> {
    inner: S,
    /// Failure rate (0.0 = never fail, 1.0 = always fail)
    failure_rate: f64,
    /// RNG state for deterministic chaos
    rng: Arc<Mutex<ChaoticRng>>,
    /// Operation counter
    operation_count: Arc<AtomicUsize>,
}

/// Simple deterministic RNG for chaos injection
///
/// Uses linear congruential generator (LCG) for fast, deterministic randomness.
/// This ensures chaos tests are reproducible with the same seed.
struct ChaoticRng {
    state: u64,
}

impl ChaoticRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next random value [0.0, 1.0)
    fn next(&mut self) -> f64 {
        // LCG constants from Numerical Recipes
        const A: u64 = 1_664_525;
        const C: u64 = 1_013_904_223;
        const M: u64 = 1u64 << 32;

        self.state = (A.wrapping_mul(self.state).wrapping_add(C)) % M;
        (self.state as f64) / (M as f64)
    }
}

impl<S: CustomServerStore> ChaoticStore<S> {
    /// Create a new chaotic store wrapper with a fixed seed.
    ///
    /// `failure_rate` is clamped to [0.0, 1.0].
    pub fn new(inner: S, failure_rate: f64) -> Self {
        Self::with_seed(inner, failure_rate, 0x1234_5678_9ABC_DEF0)
    }

    /// Create with explicit seed for reproducible chaos
    pub fn with_seed(inner: S, failure_rate: f64, seed: u64) -> Self {
        Self {
            inner,
            failure_rate: failure_rate.clamp(0.0, 1.0),
            rng: Arc::new(Mutex::new(ChaoticRng::new(seed))),
            operation_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Underlying store (for checking invariants after chaos).
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Total number of store operations attempted.
    pub fn operation_count(&self) -> usize {
        self.operation_count.load(Ordering::Relaxed)
    }

    /// Count the operation and decide whether it fails.
    fn roll(&self, operation: &str) -> Result<(), StoreError> {
        self.operation_count.fetch_add(1, Ordering::Relaxed);

        let fail = {
            let mut rng = self.rng.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            rng.next() < self.failure_rate
        };

        if fail {
            tracing::debug!(operation, "chaotic store injecting failure");
            Err(StoreError::Io(format!("injected failure during {operation}")))
        } else {
            Ok(())
        }
    }
}

impl<S: CustomServerStore> CustomServerStore for ChaoticStore<S> {
    fn get(&self, player: &PlayerId) -> Result<Vec<ServerEntry>, StoreError> {
        self.roll("get")?;
        self.inner.get(player)
    }

    fn add(&self, player: &PlayerId, entry: ServerEntry) -> Result<(), StoreError> {
        self.roll("add")?;
        self.inner.add(player, entry)
    }

    fn update(
        &self,
        player: &PlayerId,
        index: usize,
        entry: ServerEntry,
    ) -> Result<(), StoreError> {
        self.roll("update")?;
        self.inner.update(player, index, entry)
    }

    fn remove(&self, player: &PlayerId, entry: &ServerEntry) -> Result<bool, StoreError> {
        self.roll("remove")?;
        self.inner.remove(player, entry)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn server() -> ServerEntry {
        ServerEntry::custom("a.example", 25565, true, false)
    }

    #[test]
    fn test_chaotic_with_zero_failure_rate() {
        let store = ChaoticStore::new(MemoryStore::new(), 0.0);
        let player = PlayerId::new("steve");

        for _ in 0..50 {
            store.add(&player, server()).unwrap();
        }

        assert_eq!(store.inner().get(&player).unwrap().len(), 50);
        assert_eq!(store.operation_count(), 50);
    }

    #[test]
    fn test_chaotic_with_100_failure_rate() {
        let store = ChaoticStore::new(MemoryStore::new(), 1.0);
        let player = PlayerId::new("steve");

        assert!(matches!(store.add(&player, server()), Err(StoreError::Io(_))));
        assert!(matches!(store.get(&player), Err(StoreError::Io(_))));
        assert!(store.inner().get(&player).unwrap().is_empty());
    }

    #[test]
    fn test_chaotic_deterministic_with_seed() {
        let outcomes = |seed| {
            let store = ChaoticStore::with_seed(MemoryStore::new(), 0.5, seed);
            let player = PlayerId::new("steve");
            (0..32).map(|_| store.add(&player, server()).is_ok()).collect::<Vec<_>>()
        };

        assert_eq!(outcomes(7), outcomes(7));
    }

    #[test]
    fn test_chaotic_clamps_failure_rate() {
        let store = ChaoticStore::new(MemoryStore::new(), 3.0);
        assert!(store.get(&PlayerId::new("steve")).is_err());
    }
}
