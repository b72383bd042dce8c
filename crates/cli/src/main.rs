// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! np - North Pole workshop simulator
//!
//! Runs one Christmas Eve: nine reindeer come back from vacation, elves
//! queue for help in threes, and Santa dispatches whichever quorum forms.

mod output;

use anyhow::Result;
use clap::Parser;
use np_core::{session, NpConfig};
use std::path::Path;
use std::sync::Arc;

use crate::output::{ConsoleSink, OutputFormat};

/// The simulation takes no arguments; tuning lives in `np.toml` and the
/// `NP_LOG` / `NP_OUTPUT` environment variables.
#[derive(Parser)]
#[command(
    name = "np",
    version,
    about = "North Pole workshop - the Santa Claus rendezvous"
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    setup_logging();

    let config = NpConfig::load(Path::new("np.toml"))?;
    let sink = Arc::new(ConsoleSink::new(OutputFormat::from_env()));

    let report = session::run(&config, sink)?;
    tracing::info!(
        rounds_helped = report.rounds_helped,
        sleigh_launched = report.sleigh_launched,
        "session complete"
    );
    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("NP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
