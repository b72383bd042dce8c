// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session lifecycle: bootstrap, run, teardown
//!
//! A session owns the station, spawns one thread per role instance and
//! tears everything down once the coordinator retires. Ownership replaces
//! the destructive shared-memory cleanup of classic IPC designs: workers
//! hold clones of the station and can never observe a destroyed resource,
//! and stragglers are drained at close instead of being stranded.

use crate::config::NpConfig;
use crate::coordination::{Station, Workshop, TEAM_SIZE};
use crate::sink::EventSink;
use rand::Rng;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to spawn {role} thread: {source}")]
    Spawn {
        role: &'static str,
        source: std::io::Error,
    },
    #[error("{role} thread panicked")]
    WorkerPanicked { role: &'static str },
}

/// What a finished session looked like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionReport {
    /// Elf groups helped before the sleigh launched
    pub rounds_helped: u32,
    /// Whether the reindeer team was dispatched
    pub sleigh_launched: bool,
}

impl From<&Workshop> for SessionReport {
    fn from(shop: &Workshop) -> Self {
        Self {
            rounds_helped: shop.rounds_helped,
            sleigh_launched: shop.sleigh_launched,
        }
    }
}

/// Run one full workshop session to completion.
///
/// Spawns the coordinator, nine reindeer and `config.elves` elves, waits
/// for the coordinator to retire (which happens once the team has been
/// dispatched), then closes the workshop and joins every worker.
pub fn run(config: &NpConfig, sink: Arc<dyn EventSink>) -> Result<SessionReport, SessionError> {
    let station = Arc::new(Station::new(sink));

    let coordinator = spawn("santa", "santa".to_string(), {
        let station = Arc::clone(&station);
        move || station.run_coordinator()
    })?;

    let mut workers = Vec::new();
    for id in 1..=TEAM_SIZE {
        let station = Arc::clone(&station);
        let vacation = jitter(config.vacation_max);
        workers.push(spawn("reindeer", format!("reindeer-{id}"), move || {
            thread::sleep(vacation);
            station.reindeer_arrive(id);
        })?);
    }
    for id in 1..=config.elves {
        let station = Arc::clone(&station);
        let workload = jitter(config.workload_max);
        workers.push(spawn("elf", format!("elf-{id}"), move || {
            thread::sleep(workload);
            station.elf_arrive(id);
        })?);
    }

    tracing::info!(elves = config.elves, "workshop session started");

    coordinator
        .join()
        .map_err(|_| SessionError::WorkerPanicked { role: "santa" })?;

    // The coordinator is gone; free anyone still parked on a gate.
    station.close(config.elves.max(TEAM_SIZE));
    for worker in workers {
        worker
            .join()
            .map_err(|_| SessionError::WorkerPanicked { role: "worker" })?;
    }

    let shop = station.snapshot();
    tracing::info!(
        rounds_helped = shop.rounds_helped,
        "workshop session finished"
    );
    Ok(SessionReport::from(&shop))
}

fn spawn(
    role: &'static str,
    name: String,
    body: impl FnOnce() + Send + 'static,
) -> Result<JoinHandle<()>, SessionError> {
    thread::Builder::new()
        .name(name)
        .spawn(body)
        .map_err(|source| SessionError::Spawn { role, source })
}

/// Uniformly random delay up to `max`, so arrivals interleave differently
/// on every run.
fn jitter(max: Duration) -> Duration {
    if max.is_zero() {
        return Duration::ZERO;
    }
    let millis = rand::thread_rng().gen_range(0..=max.as_millis() as u64);
    Duration::from_millis(millis)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
