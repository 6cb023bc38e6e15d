// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: Compare the three fit strategies on a classic textbook workload.
//!
//! ```bash
//! cargo run -p simulator --example strategy_comparison
//! ```

use fit_engine::Strategy;
use fit_registry::ProcessSpec;
use simulator::{compare, report, Scenario};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing.
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    let scenario = Scenario::new(
        vec![100, 500, 200, 300, 600],
        vec![
            ProcessSpec::new("A", 212),
            ProcessSpec::new("B", 417),
            ProcessSpec::new("C", 112),
            ProcessSpec::new("D", 426),
        ],
        Strategy::FirstFit,
    );

    let outcomes = compare(&scenario)?;

    println!("Partitions: {:?}", scenario.partitions);
    println!(
        "Processes:  {}\n",
        scenario
            .processes
            .iter()
            .map(|p| format!("{}={}", p.id.as_deref().unwrap_or("?"), p.size))
            .collect::<Vec<_>>()
            .join(", "),
    );
    print!("{}", report::render_comparison(&outcomes));

    for outcome in &outcomes {
        println!();
        print!("{}", report::render_text(outcome));
    }

    Ok(())
}
