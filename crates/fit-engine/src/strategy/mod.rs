// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`FitStrategy`] trait, the [`Strategy`] selector and the three
//! strategy implementations.

pub mod best_fit;
pub mod first_fit;
pub(crate) mod pool;
pub mod worst_fit;

use crate::{AssignmentResult, EngineError};
use best_fit::BestFit;
use first_fit::FirstFit;
use fit_registry::{InputError, Registry};
use std::fmt;
use std::str::FromStr;
use worst_fit::WorstFit;

/// Trait for fit strategies.
///
/// A strategy links still-free processes to still-free partitions in the
/// registry and reports what it did. Links already present are left
/// alone, and nothing is ever unlinked during a run.
///
/// Strategies perform no I/O.
pub trait FitStrategy: Send + Sync {
    /// Human-readable name of this strategy.
    fn name(&self) -> &str;

    /// Runs the strategy to completion over `registry`.
    fn allocate(&self, registry: &mut Registry) -> Result<AssignmentResult, EngineError>;
}

/// Selects one of the three allocation policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[serde(alias = "ff")]
    FirstFit,
    #[serde(alias = "bf")]
    BestFit,
    #[serde(alias = "wf")]
    WorstFit,
}

impl Strategy {
    /// Every strategy, in menu order.
    pub const ALL: [Strategy; 3] = [Strategy::FirstFit, Strategy::BestFit, Strategy::WorstFit];

    /// Kebab-case selector, e.g. `"best-fit"`.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::FirstFit => "first-fit",
            Strategy::BestFit => "best-fit",
            Strategy::WorstFit => "worst-fit",
        }
    }

    /// Two-letter short code, e.g. `"bf"`.
    pub fn code(self) -> &'static str {
        match self {
            Strategy::FirstFit => "ff",
            Strategy::BestFit => "bf",
            Strategy::WorstFit => "wf",
        }
    }

    /// Menu title, e.g. `"Best-Fit"`.
    pub fn title(self) -> &'static str {
        match self {
            Strategy::FirstFit => "First-Fit",
            Strategy::BestFit => "Best-Fit",
            Strategy::WorstFit => "Worst-Fit",
        }
    }

    /// The implementation behind this selector.
    pub fn fit(self) -> &'static dyn FitStrategy {
        match self {
            Strategy::FirstFit => &FirstFit,
            Strategy::BestFit => &BestFit,
            Strategy::WorstFit => &WorstFit,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = InputError;

    /// Accepts the kebab-case name, the short code, or the bare policy
    /// word (`"best"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        Strategy::ALL
            .into_iter()
            .find(|strategy| {
                let name = strategy.name();
                key == name
                    || key == strategy.code()
                    || key == name.replace('-', "")
                    || Some(key.as_str()) == name.strip_suffix("-fit")
            })
            .ok_or_else(|| InputError::UnknownStrategy {
                raw: s.trim().to_string(),
            })
    }
}
