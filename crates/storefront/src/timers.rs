//! Cancellable one-shot timers for transient UI state.
//!
//! Timers are keyed by a stable logical id rather than by the rendering
//! element they decorate: the toast has a single slot, while each
//! product's "Added" button flash gets its own key. Re-arming a key
//! cancels and replaces its pending deadline.
//!
//! The registry holds deadlines only. Nothing runs in the background;
//! the glue drives the clock by calling [`TimerRegistry::expire`] (or
//! `StorefrontSession::tick`) with the current instant.

use std::collections::HashMap;
use std::time::Instant;

use velvet_paw_core::ProductId;

/// Stable logical identity for a pending timer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// The single toast-dismissal slot. Showing a new toast re-arms this
    /// key, so only the most recent toast's timer is ever pending.
    ToastDismiss,
    /// Reset of one product's "Added" button label. Independent across
    /// products; re-adding the same product restarts only its own timer.
    AddedFlash(ProductId),
}

/// Pending one-shot deadlines keyed by [`TimerKey`].
#[derive(Debug, Clone, Default)]
pub struct TimerRegistry {
    pending: HashMap<TimerKey, Instant>,
}

impl TimerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or restart) the timer for `key`.
    ///
    /// Any pending deadline for the same key is cancelled and replaced.
    pub fn arm(&mut self, key: TimerKey, deadline: Instant) {
        self.pending.insert(key, deadline);
    }

    /// Cancel the pending timer for `key`, if any.
    ///
    /// Returns whether a timer was actually cancelled.
    pub fn cancel(&mut self, key: &TimerKey) -> bool {
        self.pending.remove(key).is_some()
    }

    /// Whether `key` currently has a pending deadline.
    #[must_use]
    pub fn is_armed(&self, key: &TimerKey) -> bool {
        self.pending.contains_key(key)
    }

    /// The pending deadline for `key`, if any.
    #[must_use]
    pub fn deadline(&self, key: &TimerKey) -> Option<Instant> {
        self.pending.get(key).copied()
    }

    /// Remove and return every timer due at `now`, earliest first.
    pub fn expire(&mut self, now: Instant) -> Vec<TimerKey> {
        let mut due: Vec<(Instant, TimerKey)> = self
            .pending
            .iter()
            .filter(|&(_, deadline)| *deadline <= now)
            .map(|(key, deadline)| (*deadline, key.clone()))
            .collect();
        due.sort_by_key(|&(deadline, _)| deadline);

        for (_, key) in &due {
            self.pending.remove(key);
        }
        due.into_iter().map(|(_, key)| key).collect()
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
