// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scenario configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! strategy = "best-fit"
//! partitions = [100, 50, "2K"]
//!
//! [[processes]]
//! id = "editor"
//! size = 80
//!
//! [[processes]]
//! size = "1K"        # id defaults to P2
//! ```

use crate::{Scenario, SimulatorError};
use fit_engine::Strategy;
use fit_registry::{parse_size, InputError, ProcessSpec};
use std::path::Path;

/// A size written either as an integer or as a suffixed string.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    Units(u64),
    Text(String),
}

impl SizeValue {
    /// Resolves to a positive integer.
    pub fn resolve(&self) -> Result<u64, InputError> {
        match self {
            SizeValue::Units(0) => Err(InputError::NotAPositiveInteger { raw: "0".into() }),
            SizeValue::Units(n) => Ok(*n),
            SizeValue::Text(s) => parse_size(s),
        }
    }
}

impl From<u64> for SizeValue {
    fn from(n: u64) -> Self {
        SizeValue::Units(n)
    }
}

/// One `[[processes]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProcessEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub size: SizeValue,
}

/// A complete scenario as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SimulationConfig {
    /// Allocation policy: `"first-fit"`, `"best-fit"` or `"worst-fit"`.
    #[serde(default = "default_strategy")]
    pub strategy: Strategy,
    /// Partition sizes in input order.
    pub partitions: Vec<SizeValue>,
    /// Processes in input order.
    #[serde(default)]
    pub processes: Vec<ProcessEntry>,
}

fn default_strategy() -> Strategy {
    Strategy::FirstFit
}

impl SimulationConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SimulatorError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SimulatorError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, SimulatorError> {
        toml::from_str(toml_str)
            .map_err(|e| SimulatorError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, SimulatorError> {
        toml::to_string_pretty(self)
            .map_err(|e| SimulatorError::Config(format!("TOML serialise error: {e}")))
    }

    /// Resolves sizes and produces a runnable [`Scenario`].
    ///
    /// Cross-field checks (counts, largest partition, ids) happen later in
    /// [`Scenario::registry`].
    pub fn scenario(&self) -> Result<Scenario, SimulatorError> {
        let partitions = self
            .partitions
            .iter()
            .map(SizeValue::resolve)
            .collect::<Result<Vec<_>, _>>()?;

        let processes = self
            .processes
            .iter()
            .map(|entry| {
                Ok(ProcessSpec {
                    id: entry.id.clone(),
                    size: entry.size.resolve()?,
                })
            })
            .collect::<Result<Vec<_>, InputError>>()?;

        Ok(Scenario::new(partitions, processes, self.strategy))
    }
}

impl From<&Scenario> for SimulationConfig {
    fn from(scenario: &Scenario) -> Self {
        Self {
            strategy: scenario.strategy,
            partitions: scenario.partitions.iter().copied().map(SizeValue::from).collect(),
            processes: scenario
                .processes
                .iter()
                .map(|p| ProcessEntry {
                    id: p.id.clone(),
                    size: p.size.into(),
                })
                .collect(),
        }
    }
}
