// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Narration output for the np binary

use np_core::{Event, EventSink};

/// How narration lines are rendered on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Resolve from `NP_OUTPUT`; anything but "json" means text.
    pub fn from_env() -> Self {
        Self::parse(std::env::var("NP_OUTPUT").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// Sink that narrates workshop events on stdout.
pub struct ConsoleSink {
    format: OutputFormat,
}

impl ConsoleSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl EventSink for ConsoleSink {
    fn record(&self, event: Event) {
        tracing::debug!(?event, "workshop event");
        match self.format {
            OutputFormat::Text => println!("{event}"),
            OutputFormat::Json => {
                if let Ok(line) = serde_json::to_string(&event) {
                    println!("{line}");
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
