// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events for the workshop protocol

use serde::{Deserialize, Serialize};
use std::fmt;

/// Effects are the gate operations a workshop transition requests.
///
/// The station executes them against real semaphores; the pure state
/// machine only describes them, which keeps every decision testable
/// without spawning a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emit an event for sinks to observe
    Emit(Event),
    /// Signal the coordinator wakeup channel with one permit
    WakeCoordinator,
    /// Bulk-signal the harness so the whole reindeer team proceeds at once
    ReleaseTeam,
    /// Bulk-signal the workbench for one elf group and reopen the door
    /// for the next group
    ReleaseGroup,
    /// The coordinator loop is done after this decision
    Retire,
}

/// Events emitted by the workshop state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The coordinator has nothing to do and blocks on the wakeup channel
    CoordinatorAsleep,
    /// A reindeer returned from vacation; `waiting` is the post-increment count
    ReindeerBack { id: u32, waiting: u32 },
    /// The ninth reindeer is back; the coordinator is being woken
    TeamComplete,
    /// An elf ran into a problem; `waiting` is the post-increment count
    ElfNeedsHelp { id: u32, waiting: u32 },
    /// A third elf joined; the coordinator is being woken
    GroupComplete,
    /// The coordinator dispatches the reindeer team
    SleighReady,
    /// The coordinator dispatches a group of three elves
    HelpingElves,
    /// The coordinator exits its loop
    CoordinatorRetired,
    /// The session is tearing down; later arrivals are turned away
    WorkshopClosed,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::CoordinatorAsleep => write!(f, "Santa: I am going to sleep."),
            Event::ReindeerBack { id, waiting } => {
                write!(f, "Reindeer {}: back from vacation ({}/9).", id, waiting)
            }
            Event::TeamComplete => {
                write!(f, "Reindeer: the whole team is back, waking Santa.")
            }
            Event::ElfNeedsHelp { id, waiting } => {
                write!(f, "Elf {}: I have a problem ({}/3).", id, waiting)
            }
            Event::GroupComplete => {
                write!(f, "Elf: three of us are stuck, waking Santa.")
            }
            Event::SleighReady => {
                write!(f, "Santa: The nine reindeer arrived, prepare the sleigh.")
            }
            Event::HelpingElves => write!(f, "Santa: Three elves need my help."),
            Event::CoordinatorRetired => {
                write!(f, "Santa: the sleigh is away, my work here is done.")
            }
            Event::WorkshopClosed => write!(f, "Workshop: closed until next year."),
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
