// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! A scenario: everything one allocation run needs, before validation.
//!
//! Scenarios come from a TOML file ([`crate::SimulationConfig`]), from
//! the interactive [`crate::Collector`], or from inline CLI lists parsed
//! here.

use crate::SimulatorError;
use fit_engine::Strategy;
use fit_registry::{parse_size, InputError, ProcessSpec, Registry};

/// Inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Scenario {
    /// Partition sizes in input order.
    pub partitions: Vec<u64>,
    /// Processes in input order.
    pub processes: Vec<ProcessSpec>,
    pub strategy: Strategy,
}

impl Scenario {
    pub fn new(partitions: Vec<u64>, processes: Vec<ProcessSpec>, strategy: Strategy) -> Self {
        Self {
            partitions,
            processes,
            strategy,
        }
    }

    /// Validates the scenario and builds a fresh registry for it.
    pub fn registry(&self) -> Result<Registry, SimulatorError> {
        Ok(Registry::build(&self.partitions, self.processes.clone())?)
    }
}

/// Parses a comma-separated list of partition sizes, e.g. `"100,50,2K"`.
pub fn parse_partition_list(raw: &str) -> Result<Vec<u64>, InputError> {
    raw.split(',').map(parse_size).collect()
}

/// Parses a comma-separated list of processes.
///
/// Each entry is either a bare size (`"80"`, id generated) or
/// `id=size` (`"editor=80"`). `id:size` is accepted as well.
pub fn parse_process_list(raw: &str) -> Result<Vec<ProcessSpec>, InputError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .enumerate()
        .map(|(position, entry)| match entry.split_once(['=', ':']) {
            Some((id, size)) => {
                let id = id.trim();
                if id.is_empty() {
                    return Err(InputError::EmptyProcessId {
                        position: position + 1,
                    });
                }
                Ok(ProcessSpec::new(id, parse_size(size)?))
            }
            None => Ok(ProcessSpec::anonymous(parse_size(entry)?)),
        })
        .collect()
}
