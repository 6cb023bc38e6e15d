// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fit-sim run` command: allocate with one strategy and print the result.

use super::{InputArgs, OutputFormat};
use fit_engine::Strategy;
use simulator::{report, Outcome};
use std::path::PathBuf;

pub fn execute(
    config: Option<PathBuf>,
    input: InputArgs,
    strategy: Option<String>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut scenario = super::load_scenario(config, input)?;
    if let Some(raw) = strategy {
        scenario.strategy = raw.parse::<Strategy>()?;
    }

    let outcome = simulator::run(&scenario)?;
    print_outcome(&outcome, format)
}

/// Shared with `interactive`.
pub fn print_outcome(outcome: &Outcome, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", report::render_json(outcome)?),
        OutputFormat::Text => {
            println!("╔══════════════════════════════════════════════════════╗");
            println!("║            fit-sim · Partition Allocation            ║");
            println!("╚══════════════════════════════════════════════════════╝");
            println!();
            print!("{}", report::render_text(outcome));

            let unassigned = outcome.result.stats.unassigned_processes;
            if unassigned > 0 {
                println!();
                println!("  ⚠ {unassigned} process(es) could not be placed.");
            }
        }
    }
    Ok(())
}
