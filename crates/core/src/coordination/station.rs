// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The live rendezvous station
//!
//! Owns the shared [`Workshop`] behind its mutex and the four gates the
//! roles block on, and executes the effects the state machine requests.
//! This is the runtime half of the protocol: `workshop.rs` decides,
//! the station blocks and releases.

use crate::coordination::semaphore::Semaphore;
use crate::coordination::workshop::{Workshop, WorkshopInput, GROUP_SIZE, TEAM_SIZE};
use crate::effect::{Effect, Event};
use crate::sink::EventSink;
use std::sync::{Arc, Mutex};

/// Point-in-time permit counts for the four gates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StationGauges {
    /// Pending coordinator wakeups
    pub wakeups: u32,
    /// Unconsumed reindeer releases
    pub harness: u32,
    /// Unconsumed elf releases
    pub workbench: u32,
    /// Elves the door will still admit into the current round
    pub door: u32,
}

/// Shared rendezvous point for the coordinator, the reindeer and the elves.
///
/// The mutex is held only around observe-decide-mutate; every blocking
/// wait happens outside it. Bulk signals are issued while the mutex is
/// held so a decision and its releases form one atomic step, exactly the
/// ordering the protocol needs to avoid lost wakeups.
pub struct Station {
    shop: Mutex<Workshop>,
    /// Workers signal one unit per quorum event; the coordinator waits on it
    wakeups: Semaphore,
    /// The coordinator signals nine units to launch the team
    harness: Semaphore,
    /// The coordinator signals three units to help one group
    workbench: Semaphore,
    /// Admission gate: at most three elves join a round; reopened on dispatch
    door: Semaphore,
    sink: Arc<dyn EventSink>,
}

impl Station {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            shop: Mutex::new(Workshop::new()),
            wakeups: Semaphore::new(0),
            harness: Semaphore::new(0),
            workbench: Semaphore::new(0),
            door: Semaphore::new(GROUP_SIZE),
            sink,
        }
    }

    /// Apply one input to the shared workshop and execute its effects.
    ///
    /// Semaphore signals run under the mutex; events are emitted after it
    /// is released. Returns the effects so callers can see what happened
    /// (an empty list on an arrival means the workshop was closed).
    /// Public so tests can script exact interleavings.
    pub fn apply(&self, input: WorkshopInput) -> Vec<Effect> {
        let mut shop = self.shop.lock().unwrap_or_else(|e| e.into_inner());
        let (next, effects) = shop.transition(input);
        *shop = next;
        for effect in &effects {
            match effect {
                Effect::WakeCoordinator => self.wakeups.signal(1),
                Effect::ReleaseTeam => self.harness.signal(TEAM_SIZE),
                Effect::ReleaseGroup => {
                    self.workbench.signal(GROUP_SIZE);
                    self.door.signal(GROUP_SIZE);
                }
                Effect::Emit(_) | Effect::Retire => {}
            }
        }
        drop(shop);

        tracing::debug!(?input, effects = effects.len(), "workshop transition");
        for effect in &effects {
            if let Effect::Emit(event) = effect {
                self.sink.record(event.clone());
            }
        }
        effects
    }

    /// One reindeer returns from vacation and waits to be harnessed.
    ///
    /// The ninth arrival wakes the coordinator; everyone then blocks until
    /// the coordinator's bulk signal releases the whole team at once.
    pub fn reindeer_arrive(&self, id: u32) {
        let effects = self.apply(WorkshopInput::ReindeerArrive { id });
        if effects.is_empty() {
            return; // workshop already closed
        }
        self.harness.wait(1);
    }

    /// One elf runs into a problem and waits at the workbench for help.
    ///
    /// The door admits at most three elves per round: a fourth arrival
    /// blocks here until the current group has been dispatched, so it can
    /// never join a round in progress.
    pub fn elf_arrive(&self, id: u32) {
        self.door.wait(1);
        let effects = self.apply(WorkshopInput::ElfArrive { id });
        if effects.is_empty() {
            return;
        }
        self.workbench.wait(1);
    }

    /// The coordinator loop: sleep, wake on a quorum event, inspect,
    /// dispatch, repeat until retired.
    pub fn run_coordinator(&self) {
        loop {
            self.sink.record(Event::CoordinatorAsleep);
            self.wakeups.wait(1);
            let effects = self.apply(WorkshopInput::Inspect);
            if effects.iter().any(|e| matches!(e, Effect::Retire)) {
                self.sink.record(Event::CoordinatorRetired);
                return;
            }
        }
    }

    /// Close the workshop and free every worker still parked on a gate.
    ///
    /// `capacity` must be at least the number of workers that may still
    /// arrive or be waiting; surplus permits are harmless after close.
    /// Also wakes the coordinator so an idle loop retires.
    pub fn close(&self, capacity: u32) {
        self.apply(WorkshopInput::Close);
        self.wakeups.signal(1);
        self.harness.signal(capacity);
        self.workbench.signal(capacity);
        self.door.signal(capacity);
    }

    /// Snapshot of the shared counters.
    pub fn snapshot(&self) -> Workshop {
        self.shop.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Permit counts of the four gates.
    pub fn gauges(&self) -> StationGauges {
        StationGauges {
            wakeups: self.wakeups.permits(),
            harness: self.harness.permits(),
            workbench: self.workbench.permits(),
            door: self.door.permits(),
        }
    }
}

#[cfg(test)]
#[path = "station_tests.rs"]
mod tests;
