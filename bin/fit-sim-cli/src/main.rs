// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # fit-sim
//!
//! Command-line interface for the fixed-partition allocation simulator.
//!
//! ## Usage
//! ```bash
//! # Run one strategy on inline input
//! fit-sim run --partitions 100,50,200 --processes editor=80,30 --strategy best-fit
//!
//! # Run a scenario file, JSON output
//! fit-sim --config scenario.toml run --format json
//!
//! # Compare all three strategies
//! fit-sim compare --partitions 100,500,200,300,600 --processes 212,417,112,426
//!
//! # Answer prompts one value at a time
//! fit-sim interactive
//! ```

mod commands;

use clap::{Parser, Subcommand};
use commands::{InputArgs, OutputFormat};

#[derive(Parser)]
#[command(
    name = "fit-sim",
    about = "Fixed-partition memory allocation simulator (First-Fit, Best-Fit, Worst-Fit)",
    version,
    author
)]
struct Cli {
    /// Path to a TOML scenario file (used instead of --partitions/--processes).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate processes to partitions with one strategy.
    Run {
        #[command(flatten)]
        input: InputArgs,

        /// Strategy: first-fit, best-fit, worst-fit (or ff, bf, wf).
        /// Defaults to the scenario file's strategy, else first-fit.
        #[arg(short, long)]
        strategy: Option<String>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Run all three strategies on the same input and compare them.
    Compare {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Enter partitions, processes and strategy at interactive prompts.
    Interactive {
        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            input,
            strategy,
            format,
        } => commands::run::execute(cli.config, input, strategy, format),
        Commands::Compare { input } => commands::compare::execute(cli.config, input),
        Commands::Interactive { format } => commands::interactive::execute(format),
    }
}
