// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and the helpers they share.

pub mod compare;
pub mod interactive;
pub mod run;

use fit_engine::Strategy;
use simulator::{Scenario, SimulationConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Inline scenario input.
#[derive(clap::Args)]
pub struct InputArgs {
    /// Comma-separated partition sizes, e.g. "100,50,200" or "64K,1M".
    #[arg(short, long)]
    pub partitions: Option<String>,

    /// Comma-separated processes: "size" or "id=size", e.g. "editor=80,30".
    #[arg(short = 'P', long)]
    pub processes: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Installs the global subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Builds the scenario from either `--config` or the inline lists.
pub fn load_scenario(config: Option<PathBuf>, input: InputArgs) -> anyhow::Result<Scenario> {
    match (config, input.partitions, input.processes) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(anyhow::anyhow!(
            "use either --config or --partitions/--processes, not both"
        )),
        (Some(path), None, None) => {
            tracing::info!("loading scenario from '{}'", path.display());
            Ok(SimulationConfig::from_file(&path)?.scenario()?)
        }
        (None, Some(partitions), processes) => {
            let partitions = simulator::parse_partition_list(&partitions)?;
            let processes = simulator::parse_process_list(processes.as_deref().unwrap_or(""))?;
            Ok(Scenario::new(partitions, processes, Strategy::FirstFit))
        }
        (None, None, _) => Err(anyhow::anyhow!(
            "no input: pass --config FILE or --partitions LIST [--processes LIST]"
        )),
    }
}
