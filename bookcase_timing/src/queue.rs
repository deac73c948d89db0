// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Keyed one-shot timers.
///
/// Each key has at most one pending deadline; scheduling a key again moves
/// its deadline. Deadlines are milliseconds on the host's clock.
///
/// The queue is expected to hold a handful of timers, so it is a flat list
/// scanned on every poll.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    pending: Vec<(K, f64)>,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<K: Copy + PartialEq> TimerQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `key` to fire at `deadline_ms`, replacing any pending
    /// deadline for it.
    pub fn schedule(&mut self, key: K, deadline_ms: f64) {
        match self.pending.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = deadline_ms,
            None => self.pending.push((key, deadline_ms)),
        }
    }

    /// Cancels `key`. Returns `true` if it was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(k, _)| *k != key);
        self.pending.len() != before
    }

    /// Returns `true` if `key` is pending.
    #[must_use]
    pub fn is_pending(&self, key: K) -> bool {
        self.pending.iter().any(|(k, _)| *k == key)
    }

    /// Returns the deadline of `key`, if it is pending.
    #[must_use]
    pub fn deadline(&self, key: K) -> Option<f64> {
        self.pending
            .iter()
            .find_map(|(k, d)| (*k == key).then_some(*d))
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.pending
            .iter()
            .map(|(_, d)| *d)
            .min_by(f64::total_cmp)
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every key whose deadline is at or before `now_ms`,
    /// earliest first.
    ///
    /// A timer with a non-finite deadline never fires.
    pub fn poll(&mut self, now_ms: f64) -> Vec<K> {
        let mut due: Vec<(K, f64)> = Vec::new();
        self.pending.retain(|&(k, d)| {
            if d <= now_ms {
                due.push((k, d));
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.1.total_cmp(&b.1));
        due.into_iter().map(|(k, _)| k).collect()
    }

    /// Cancels every timer.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
