// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fit-sim interactive` command: gather the scenario at terminal prompts.

use super::OutputFormat;
use inquire::{Select, Text};
use simulator::{Collector, Prompter, SimulatorError};

/// [`Prompter`] backed by `inquire` terminal widgets.
struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String, SimulatorError> {
        let mut prompt = Text::new(message);
        if let Some(default) = default {
            prompt = prompt.with_default(default);
        }
        prompt
            .prompt()
            .map_err(|e| SimulatorError::Prompt(e.to_string()))
    }

    fn select(&mut self, message: &str, options: &[&str]) -> Result<usize, SimulatorError> {
        Select::new(message, options.to_vec())
            .raw_prompt()
            .map(|choice| choice.index)
            .map_err(|e| SimulatorError::Prompt(e.to_string()))
    }

    fn warn(&mut self, message: &str) {
        eprintln!("  ⚠ {message}");
    }
}

pub fn execute(format: OutputFormat) -> anyhow::Result<()> {
    let scenario = Collector::new(InquirePrompter).collect()?;
    let outcome = simulator::run(&scenario)?;
    println!();
    super::run::print_outcome(&outcome, format)
}
