// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workshop state machine for the Santa Claus rendezvous
//!
//! Pure decision logic: arrivals and inspections in, effects out. The
//! [`Station`](crate::coordination::Station) executes the effects against
//! real semaphores; tests drive transitions directly.

use crate::effect::{Effect, Event};

/// Reindeer needed before the sleigh can launch.
pub const TEAM_SIZE: u32 = 9;

/// Elves helped per round, never more, never fewer.
pub const GROUP_SIZE: u32 = 3;

/// Shared workshop counters, always read and mutated under the station mutex.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Workshop {
    /// Reindeer queued for the sleigh
    pub reindeer_waiting: u32,
    /// Elves queued for help in the current round
    pub elves_waiting: u32,
    /// Elf rounds dispatched so far
    pub rounds_helped: u32,
    /// Set when the team has been dispatched; the coordinator retires after this
    pub sleigh_launched: bool,
    /// Set at teardown; arrivals after this are turned away
    pub closed: bool,
}

/// Inputs that drive workshop transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkshopInput {
    /// A reindeer is back from vacation
    ReindeerArrive { id: u32 },
    /// An elf ran into a problem it cannot solve alone
    ElfArrive { id: u32 },
    /// The coordinator woke up and inspects the counters
    Inspect,
    /// The session is tearing down
    Close,
}

impl Workshop {
    /// Create an empty workshop, doors open, sleigh parked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure state transition function.
    ///
    /// An arrival at a closed workshop returns no effects; the station
    /// reads that as "turned away, do not wait on a gate".
    pub fn transition(&self, input: WorkshopInput) -> (Workshop, Vec<Effect>) {
        let mut next = self.clone();
        let mut effects = Vec::new();

        match input {
            WorkshopInput::ReindeerArrive { id } => {
                if next.closed {
                    return (next, effects);
                }
                next.reindeer_waiting += 1;
                effects.push(Effect::Emit(Event::ReindeerBack {
                    id,
                    waiting: next.reindeer_waiting,
                }));
                // Only the arrival that completes the team wakes the
                // coordinator; the first eight stay silent.
                if next.reindeer_waiting == TEAM_SIZE {
                    effects.push(Effect::Emit(Event::TeamComplete));
                    effects.push(Effect::WakeCoordinator);
                }
            }

            WorkshopInput::ElfArrive { id } => {
                if next.closed {
                    return (next, effects);
                }
                next.elves_waiting += 1;
                effects.push(Effect::Emit(Event::ElfNeedsHelp {
                    id,
                    waiting: next.elves_waiting,
                }));
                if next.elves_waiting == GROUP_SIZE {
                    effects.push(Effect::Emit(Event::GroupComplete));
                    effects.push(Effect::WakeCoordinator);
                }
            }

            WorkshopInput::Inspect => {
                if next.closed {
                    effects.push(Effect::Retire);
                } else if next.reindeer_waiting >= TEAM_SIZE {
                    // Reindeer win over elves when both quorums are ready.
                    next.reindeer_waiting -= TEAM_SIZE;
                    next.sleigh_launched = true;
                    effects.push(Effect::Emit(Event::SleighReady));
                    effects.push(Effect::ReleaseTeam);
                    effects.push(Effect::Retire);
                } else if next.elves_waiting >= GROUP_SIZE {
                    next.elves_waiting -= GROUP_SIZE;
                    next.rounds_helped += 1;
                    effects.push(Effect::Emit(Event::HelpingElves));
                    effects.push(Effect::ReleaseGroup);
                }
                // Anything else is a wakeup that lost its race; the
                // coordinator goes back to sleep.
            }

            WorkshopInput::Close => {
                if !next.closed {
                    next.closed = true;
                    effects.push(Effect::Emit(Event::WorkshopClosed));
                }
            }
        }

        (next, effects)
    }
}

#[cfg(test)]
#[path = "workshop_tests.rs"]
mod tests;
