// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Assignment result: the output of one strategy run.
//!
//! The registry holds the authoritative relation; the result records the
//! order in which links were made plus aggregate stats, and is the
//! contract between the engine and whoever reports on it.

use crate::{AssignmentStats, EngineError, Strategy};
use fit_registry::{PartitionId, Registry};
use std::collections::HashSet;

/// One link made by a strategy.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AssignmentStep {
    /// Position of this step in the run, starting at 0.
    pub step: usize,
    pub process_index: usize,
    pub process_id: String,
    pub process_size: u64,
    pub partition: PartitionId,
    pub partition_size: u64,
}

impl AssignmentStep {
    /// Capacity left unused inside the partition.
    pub fn slack(&self) -> u64 {
        self.partition_size - self.process_size
    }
}

/// The completed assignment produced by a [`crate::FitStrategy`].
#[derive(Debug, Clone, serde::Serialize)]
pub struct AssignmentResult {
    /// Strategy that produced this result.
    pub strategy: Strategy,
    /// Links in the order they were made.
    pub steps: Vec<AssignmentStep>,
    /// Stats over the registry after the run.
    pub stats: AssignmentStats,
}

impl AssignmentResult {
    /// Returns the number of links made during the run.
    pub fn num_assigned(&self) -> usize {
        self.steps.len()
    }

    /// Partition given to the process with `process_id`, if any.
    pub fn partition_for(&self, process_id: &str) -> Option<PartitionId> {
        self.steps
            .iter()
            .find(|s| s.process_id == process_id)
            .map(|s| s.partition)
    }

    /// Re-checks the result against the registry.
    ///
    /// Checks:
    /// - Step numbers are consecutive starting from 0.
    /// - No process and no partition appears in two steps.
    /// - Every step satisfies `process_size <= partition_size`.
    /// - Every step is reflected in both directions in the registry.
    /// - The registry holds at most `min(partitions, processes)` links.
    pub fn validate(&self, registry: &Registry) -> Result<(), EngineError> {
        let mut seen_processes = HashSet::with_capacity(self.steps.len());
        let mut seen_partitions = HashSet::with_capacity(self.steps.len());

        for (expected, step) in self.steps.iter().enumerate() {
            if step.step != expected {
                return Err(self.inconsistent(format!(
                    "expected step {expected}, got {}",
                    step.step
                )));
            }

            if !seen_processes.insert(step.process_index) {
                return Err(self.inconsistent(format!(
                    "process '{}' assigned more than once",
                    step.process_id
                )));
            }
            if !seen_partitions.insert(step.partition) {
                return Err(self.inconsistent(format!(
                    "partition {} assigned more than once",
                    step.partition
                )));
            }

            if step.process_size > step.partition_size {
                return Err(self.inconsistent(format!(
                    "process '{}' ({}) placed in partition {} ({})",
                    step.process_id, step.process_size, step.partition, step.partition_size,
                )));
            }

            let linked = registry.partition_of(step.process_index) == Some(step.partition.index())
                && registry.occupant_of(step.partition.index()) == Some(step.process_index);
            if !linked {
                return Err(self.inconsistent(format!(
                    "step {} ('{}' → {}) is not reflected in the registry",
                    step.step, step.process_id, step.partition,
                )));
            }
        }

        let bound = registry.partition_count().min(registry.process_count());
        if registry.assigned_count() > bound {
            return Err(self.inconsistent(format!(
                "{} links exceed the bound of {bound}",
                registry.assigned_count()
            )));
        }

        Ok(())
    }

    /// Returns a human-readable summary of the result.
    pub fn summary(&self) -> String {
        format!(
            "Strategy '{}': {} steps, {}",
            self.strategy,
            self.num_assigned(),
            self.stats.summary(),
        )
    }

    fn inconsistent(&self, detail: String) -> EngineError {
        EngineError::InconsistentResult {
            strategy: self.strategy.to_string(),
            detail,
        }
    }
}

/// Builder helper that links pairs in the registry and records each step.
///
/// Used internally by strategy implementations.
pub(crate) struct ResultBuilder {
    strategy: Strategy,
    steps: Vec<AssignmentStep>,
}

impl ResultBuilder {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            steps: Vec::new(),
        }
    }

    /// Links `process_idx` to `partition_idx` and records the step.
    pub fn link(
        &mut self,
        registry: &mut Registry,
        process_idx: usize,
        partition_idx: usize,
    ) -> Result<(), EngineError> {
        registry.assign(process_idx, partition_idx)?;

        // Both indices were range-checked by `assign`.
        let process = &registry.processes()[process_idx];
        let partition = &registry.partitions()[partition_idx];

        tracing::debug!(
            "{}: process '{}' ({}) → partition {} ({})",
            self.strategy,
            process.id,
            process.size,
            partition.id,
            partition.size,
        );

        self.steps.push(AssignmentStep {
            step: self.steps.len(),
            process_index: process_idx,
            process_id: process.id.clone(),
            process_size: process.size,
            partition: partition.id,
            partition_size: partition.size,
        });
        Ok(())
    }

    /// Consumes the builder and returns the finished result.
    pub fn build(self, registry: &Registry) -> AssignmentResult {
        AssignmentResult {
            strategy: self.strategy,
            steps: self.steps,
            stats: AssignmentStats::from_registry(registry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fit_registry::ProcessSpec;

    fn registry() -> Registry {
        Registry::build(
            &[100, 50, 200],
            vec![ProcessSpec::new("a", 80), ProcessSpec::new("b", 30)],
        )
        .unwrap()
    }

    fn step(step: usize, process_index: usize, partition: usize) -> AssignmentStep {
        AssignmentStep {
            step,
            process_index,
            process_id: format!("p{process_index}"),
            process_size: 10,
            partition: PartitionId(partition),
            partition_size: 20,
        }
    }

    #[test]
    fn test_builder_links_and_records() {
        let mut r = registry();
        let mut b = ResultBuilder::new(Strategy::FirstFit);
        b.link(&mut r, 0, 2).unwrap();
        b.link(&mut r, 1, 1).unwrap();
        let result = b.build(&r);

        assert_eq!(result.num_assigned(), 2);
        assert_eq!(result.steps[0].process_id, "a");
        assert_eq!(result.steps[0].slack(), 120);
        assert_eq!(result.steps[1].step, 1);
        assert_eq!(result.partition_for("b"), Some(PartitionId(1)));
        assert_eq!(result.partition_for("zzz"), None);
        assert_eq!(result.stats.idle_partitions, 1);
        result.validate(&r).unwrap();
    }

    #[test]
    fn test_builder_propagates_registry_error() {
        let mut r = registry();
        let mut b = ResultBuilder::new(Strategy::BestFit);
        let err = b.link(&mut r, 0, 1).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Registry(fit_registry::RegistryError::SizeMismatch { .. })
        ));
        assert_eq!(b.build(&r).num_assigned(), 0);
    }

    #[test]
    fn test_validate_duplicate_partition() {
        let r = registry();
        let result = AssignmentResult {
            strategy: Strategy::WorstFit,
            steps: vec![step(0, 0, 2), step(1, 1, 2)],
            stats: AssignmentStats::default(),
        };
        let err = result.validate(&r).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_validate_bad_step_number() {
        let r = registry();
        let result = AssignmentResult {
            strategy: Strategy::WorstFit,
            steps: vec![step(3, 0, 2)],
            stats: AssignmentStats::default(),
        };
        assert!(result.validate(&r).is_err());
    }

    #[test]
    fn test_validate_size_violation() {
        let r = registry();
        let mut bad = step(0, 0, 1);
        bad.process_size = 80;
        bad.partition_size = 50;
        let result = AssignmentResult {
            strategy: Strategy::FirstFit,
            steps: vec![bad],
            stats: AssignmentStats::default(),
        };
        assert!(matches!(
            result.validate(&r),
            Err(EngineError::InconsistentResult { .. })
        ));
    }

    #[test]
    fn test_validate_unlinked_step() {
        let r = registry();
        let result = AssignmentResult {
            strategy: Strategy::FirstFit,
            steps: vec![step(0, 0, 0)],
            stats: AssignmentStats::default(),
        };
        let err = result.validate(&r).unwrap_err();
        assert!(err.to_string().contains("not reflected"));
    }

    #[test]
    fn test_summary() {
        let mut r = registry();
        let mut b = ResultBuilder::new(Strategy::BestFit);
        b.link(&mut r, 0, 0).unwrap();
        let s = b.build(&r).summary();
        assert!(s.contains("best-fit"));
        assert!(s.contains("1 steps"));
    }
}
