// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fit-sim compare` command: run every strategy on the same input.

use super::InputArgs;
use simulator::report;
use std::path::PathBuf;

pub fn execute(config: Option<PathBuf>, input: InputArgs) -> anyhow::Result<()> {
    let scenario = super::load_scenario(config, input)?;
    let outcomes = simulator::compare(&scenario)?;

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            fit-sim · Strategy Comparison             ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!(
        "  Partitions: {}",
        scenario
            .partitions
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    );
    println!("  Processes:  {}", scenario.processes.len());
    println!();
    print!("{}", report::render_comparison(&outcomes));

    // Fewest unassigned wins; ties go to lower fragmentation.
    if let Some(best) = outcomes.iter().min_by_key(|o| {
        (
            o.result.stats.unassigned_processes,
            o.result.stats.internal_fragmentation,
        )
    }) {
        println!();
        println!("  Recommendation: {}", best.strategy().title());
    }

    Ok(())
}
