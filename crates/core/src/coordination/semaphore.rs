// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Counting semaphore with bulk signal
//!
//! The protocol needs the `semop` shape: the coordinator grants a whole
//! group in one signal and each waiter consumes exactly one unit. The
//! standard library has no counting semaphore, so this one is built from
//! a mutex and a condition variable.

use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// Counting semaphore whose `signal` can add several permits at once.
pub struct Semaphore {
    permits: Mutex<u32>,
    available: Condvar,
}

impl Semaphore {
    /// Create a semaphore holding `permits` units.
    pub fn new(permits: u32) -> Self {
        Self {
            permits: Mutex::new(permits),
            available: Condvar::new(),
        }
    }

    /// Block until `amount` permits are available, then consume them atomically.
    pub fn wait(&self, amount: u32) {
        let mut permits = self.permits.lock().unwrap_or_else(|e| e.into_inner());
        while *permits < amount {
            permits = self
                .available
                .wait(permits)
                .unwrap_or_else(|e| e.into_inner());
        }
        *permits -= amount;
    }

    /// Add `amount` permits in one operation and wake every waiter.
    ///
    /// A bulk signal of N is consumed by exactly N unit waiters; the
    /// condition variable re-checks under the lock, so nothing is released
    /// beyond the permits granted.
    pub fn signal(&self, amount: u32) {
        let mut permits = self.permits.lock().unwrap_or_else(|e| e.into_inner());
        *permits += amount;
        self.available.notify_all();
    }

    /// Like [`wait`](Self::wait), but gives up after `timeout`.
    ///
    /// Returns `true` if the permits were consumed. The protocol never
    /// uses this; it exists so a test against a broken interleaving fails
    /// instead of hanging.
    pub fn wait_for(&self, amount: u32, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut permits = self.permits.lock().unwrap_or_else(|e| e.into_inner());
        while *permits < amount {
            let Some(remaining) = deadline.checked_duration_since(Instant::now()) else {
                return false;
            };
            let (guard, result) = self
                .available
                .wait_timeout(permits, remaining)
                .unwrap_or_else(|e| e.into_inner());
            permits = guard;
            if result.timed_out() && *permits < amount {
                return false;
            }
        }
        *permits -= amount;
        true
    }

    /// Current permit count, for diagnostics and tests.
    pub fn permits(&self) -> u32 {
        *self.permits.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "semaphore_tests.rs"]
mod tests;
