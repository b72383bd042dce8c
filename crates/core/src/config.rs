// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session configuration
//!
//! Tunes the cast and the pacing of a run. Group sizes are protocol
//! constants and deliberately not configurable.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Runtime tuning for a workshop session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NpConfig {
    /// Number of elves in the pool
    pub elves: u32,
    /// Longest reindeer vacation before returning to the workshop
    #[serde(with = "humantime_serde")]
    pub vacation_max: Duration,
    /// Longest stretch an elf tinkers before needing help
    #[serde(with = "humantime_serde")]
    pub workload_max: Duration,
}

impl Default for NpConfig {
    fn default() -> Self {
        Self {
            elves: 12,
            vacation_max: Duration::from_millis(50),
            workload_max: Duration::from_millis(50),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl NpConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
