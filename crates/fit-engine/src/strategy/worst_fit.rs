// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Worst-Fit strategy.
//!
//! Same queue discipline as [`crate::BestFit`], but the head of the queue
//! takes the *largest* free partition (earliest in input order on ties).
//!
//! If the largest free partition is smaller than the head process then no
//! free partition fits it, and the process is left unassigned.

use crate::result::ResultBuilder;
use crate::strategy::pool::PartitionPool;
use crate::strategy::FitStrategy;
use crate::{AssignmentResult, EngineError, Strategy};
use fit_registry::Registry;

/// Each process, in order, takes the roomiest free partition.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorstFit;

impl WorstFit {
    pub fn new() -> Self {
        Self
    }
}

impl FitStrategy for WorstFit {
    fn name(&self) -> &str {
        Strategy::WorstFit.name()
    }

    fn allocate(&self, registry: &mut Registry) -> Result<AssignmentResult, EngineError> {
        let mut builder = ResultBuilder::new(Strategy::WorstFit);
        let mut pool = PartitionPool::unoccupied(registry);
        let queue: Vec<usize> = (0..registry.process_count())
            .filter(|&idx| registry.partition_of(idx).is_none())
            .collect();

        tracing::debug!(
            "worst-fit: {} queued processes, {} free partitions",
            queue.len(),
            pool.len(),
        );

        for process_idx in queue {
            if pool.is_empty() {
                tracing::debug!("worst-fit: no free partitions left");
                break;
            }
            let need = registry.processes()[process_idx].size;

            match pool.largest() {
                Some(pos) if pool.size_at(pos) >= need => {
                    let partition_idx = pool.take(pos);
                    builder.link(registry, process_idx, partition_idx)?;
                }
                _ => {
                    tracing::warn!(
                        "worst-fit: no free partition fits process '{}' ({need}); left unassigned",
                        registry.processes()[process_idx].id,
                    );
                }
            }
        }

        Ok(builder.build(registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fit_registry::{PartitionId, ProcessSpec};

    fn registry(partitions: &[u64], processes: &[u64]) -> Registry {
        let specs = processes.iter().map(|&s| ProcessSpec::anonymous(s)).collect();
        Registry::build(partitions, specs).unwrap()
    }

    #[test]
    fn test_worst_fit_textbook_scenario() {
        let mut r = registry(&[100, 50, 200], &[80, 30]);
        let result = WorstFit::new().allocate(&mut r).unwrap();

        assert_eq!(r.partition_of(0), Some(2));
        assert_eq!(r.partition_of(1), Some(0));
        assert_eq!(r.occupant_of(1), None);
        assert_eq!(result.steps[0].partition, PartitionId(2));
        assert_eq!(result.steps[1].partition, PartitionId(0));
        result.validate(&r).unwrap();
    }

    #[test]
    fn test_worst_fit_tie_goes_to_first_partition() {
        let mut r = registry(&[70, 90, 90], &[10, 10]);
        WorstFit::new().allocate(&mut r).unwrap();
        assert_eq!(r.partition_of(0), Some(1));
        assert_eq!(r.partition_of(1), Some(2));
    }

    #[test]
    fn test_worst_fit_never_places_into_smaller_partition() {
        // 1 takes the 10; the only partition left (1) cannot hold 10.
        let mut r = registry(&[10, 1], &[1, 10]);
        let result = WorstFit::new().allocate(&mut r).unwrap();

        assert_eq!(r.partition_of(0), Some(0));
        assert_eq!(r.partition_of(1), None);
        assert_eq!(result.stats.unassigned_processes, 1);
        result.validate(&r).unwrap();
    }

    #[test]
    fn test_worst_fit_exact_matches() {
        let mut r = registry(&[5, 5], &[5, 5]);
        let result = WorstFit::new().allocate(&mut r).unwrap();
        assert_eq!(result.num_assigned(), 2);
        assert_eq!(r.partition_of(0), Some(0));
        assert_eq!(r.partition_of(1), Some(1));
    }

    #[test]
    fn test_worst_fit_skips_occupied_partitions() {
        let mut r = registry(&[100, 300, 200], &[50, 60]);
        r.assign(0, 1).unwrap();
        let result = WorstFit::new().allocate(&mut r).unwrap();

        assert_eq!(result.num_assigned(), 1);
        assert_eq!(r.partition_of(1), Some(2));
    }
}
