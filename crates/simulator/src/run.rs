// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! One allocation run: scenario → registry → strategy → outcome.

use crate::{Scenario, SimulatorError};
use fit_engine::{allocate, AssignmentResult, Strategy};
use fit_registry::{Registry, Snapshot};

/// The registry after a run plus what the engine reported.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub registry: Registry,
    pub result: AssignmentResult,
}

impl Outcome {
    pub fn strategy(&self) -> Strategy {
        self.result.strategy
    }

    /// Reporting views over the final assignment.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.registry.snapshot()
    }
}

/// Runs the scenario's own strategy.
pub fn run(scenario: &Scenario) -> Result<Outcome, SimulatorError> {
    run_with(scenario, scenario.strategy)
}

/// Runs `strategy` over a fresh registry built from `scenario`.
pub fn run_with(scenario: &Scenario, strategy: Strategy) -> Result<Outcome, SimulatorError> {
    let mut registry = scenario.registry()?;
    tracing::info!(
        "registry built: {} partitions (largest {}), {} processes",
        registry.partition_count(),
        registry.largest_partition(),
        registry.process_count(),
    );

    let result = allocate(strategy, &mut registry)?;
    Ok(Outcome { registry, result })
}

/// Runs every strategy, each on its own fresh registry.
pub fn compare(scenario: &Scenario) -> Result<Vec<Outcome>, SimulatorError> {
    let base = scenario.registry()?;

    Strategy::ALL
        .iter()
        .map(|&strategy| {
            let mut registry = base.clone();
            let result = allocate(strategy, &mut registry)?;
            Ok(Outcome { registry, result })
        })
        .collect()
}
