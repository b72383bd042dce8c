// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordination primitives for the workshop rendezvous
//!
//! This module provides:
//! - **Semaphore** - Counting semaphore with bulk signal
//! - **Workshop** - Pure decision state machine over the shared counters
//! - **Station** - Live rendezvous wiring the machine to real gates

pub mod semaphore;
pub mod station;
pub mod workshop;

pub use semaphore::Semaphore;
pub use station::{Station, StationGauges};
pub use workshop::{Workshop, WorkshopInput, GROUP_SIZE, TEAM_SIZE};
