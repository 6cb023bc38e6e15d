// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Interactive input collection.
//!
//! The [`Collector`] asks for every value a [`Scenario`] needs, in this
//! order:
//!
//! ```text
//! partition count → each partition size (again while the total overflows)
//!   → process count   (again while it exceeds the partition count)
//!   → each process size (again while it exceeds the largest partition)
//!     → each process id (empty keeps the generated default; again on duplicates)
//!   → strategy
//! ```
//!
//! Malformed answers are never fatal: the corrective message goes back
//! through [`Prompter::warn`] and the same question is asked again. Only a
//! failing [`Prompter`] (e.g. the user pressed Ctrl-C) ends collection.
//!
//! The terminal implementation of [`Prompter`] lives in the CLI; tests
//! drive the collector with scripted answers.

use crate::{Scenario, SimulatorError};
use fit_engine::Strategy;
use fit_registry::{parse_size, InputError, ProcessSpec};
use std::collections::HashSet;

/// Source of answers for the [`Collector`].
pub trait Prompter {
    /// Asks for one line of text. An empty answer yields `default` when
    /// one is given.
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String, SimulatorError>;

    /// Asks the user to pick one of `options`; returns its position.
    fn select(&mut self, message: &str, options: &[&str]) -> Result<usize, SimulatorError>;

    /// Shows a corrective message before the question is repeated.
    fn warn(&mut self, message: &str);
}

/// Drives a [`Prompter`] until a complete, valid [`Scenario`] is gathered.
pub struct Collector<P> {
    prompter: P,
}

impl<P: Prompter> Collector<P> {
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    /// Returns the underlying prompter.
    pub fn into_inner(self) -> P {
        self.prompter
    }

    /// Asks every question and returns the collected scenario.
    ///
    /// The result always satisfies the registry preconditions, so
    /// [`Scenario::registry`] on it cannot fail with invalid input.
    pub fn collect(&mut self) -> Result<Scenario, SimulatorError> {
        let partition_count = self.ask_count("How many partitions?")?;

        // Counts are unbounded, so nothing is pre-sized from them.
        let mut partitions = Vec::new();
        let mut largest = 0;
        let mut capacity: u64 = 0;
        for n in 1..=partition_count {
            let size = loop {
                let size = self.ask_size(&format!("Size of partition {n}"))?;
                match capacity.checked_add(size) {
                    Some(total) => {
                        capacity = total;
                        break size;
                    }
                    None => self.reject(InputError::CapacityOverflow),
                }
            };
            largest = largest.max(size);
            partitions.push(size);
        }
        tracing::debug!("collected {partition_count} partitions, largest {largest}");

        let process_count = loop {
            let count = self.ask_count("How many processes?")?;
            if count <= partition_count {
                break count;
            }
            self.reject(InputError::TooManyProcesses {
                processes: count,
                partitions: partition_count,
            });
        };

        let mut processes = Vec::new();
        let mut ids = HashSet::new();
        for n in 1..=process_count {
            let default_id = format!("P{n}");

            let size = loop {
                let size = self.ask_size(&format!("Size of process {n}"))?;
                if size <= largest {
                    break size;
                }
                self.reject(InputError::ProcessTooLarge {
                    id: default_id.clone(),
                    size,
                    largest,
                });
            };

            let id = loop {
                let raw = self
                    .prompter
                    .text(&format!("Id of process {n}"), Some(&default_id))?;
                let id = raw.trim().to_string();
                if id.is_empty() {
                    self.reject(InputError::EmptyProcessId { position: n });
                } else if ids.contains(&id) {
                    self.reject(InputError::DuplicateProcessId { id });
                } else {
                    break id;
                }
            };

            ids.insert(id.clone());
            processes.push(ProcessSpec::new(id, size));
        }

        let strategy = self.ask_strategy()?;
        tracing::info!(
            "collected {} partitions, {} processes, strategy {strategy}",
            partitions.len(),
            processes.len(),
        );

        Ok(Scenario::new(partitions, processes, strategy))
    }

    fn ask_count(&mut self, message: &str) -> Result<usize, SimulatorError> {
        loop {
            let raw = self.prompter.text(message, None)?;
            match parse_count(&raw) {
                Ok(count) => return Ok(count),
                Err(e) => self.reject(e),
            }
        }
    }

    fn ask_size(&mut self, message: &str) -> Result<u64, SimulatorError> {
        loop {
            let raw = self.prompter.text(message, None)?;
            match parse_size(&raw) {
                Ok(size) => return Ok(size),
                Err(e) => self.reject(e),
            }
        }
    }

    fn ask_strategy(&mut self) -> Result<Strategy, SimulatorError> {
        let titles: Vec<&str> = Strategy::ALL.iter().map(|s| s.title()).collect();
        let choice = self.prompter.select("Choose an algorithm", &titles)?;
        Strategy::ALL.get(choice).copied().ok_or_else(|| {
            SimulatorError::Prompt(format!(
                "selection {choice} is not one of the offered strategies"
            ))
        })
    }

    fn reject(&mut self, error: InputError) {
        tracing::warn!("rejected input: {error}");
        self.prompter.warn(&error.to_string());
    }
}

/// Parses a positive count (no size suffixes).
pub fn parse_count(raw: &str) -> Result<usize, InputError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(InputError::NotAPositiveInteger {
            raw: raw.trim().to_string(),
        }),
    }
}
