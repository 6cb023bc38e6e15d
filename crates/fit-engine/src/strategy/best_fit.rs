// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Best-Fit strategy.
//!
//! Processes are consumed as a queue in input order. The head of the
//! queue takes the free partition whose size is closest to (and at least)
//! its own: an exact match wins immediately, otherwise the smallest
//! qualifying partition, earliest in input order on ties. The chosen
//! partition leaves the pool and the queue advances.
//!
//! The queue is never re-sorted by size. This is greedy per process, not
//! an optimal packing.

use crate::result::ResultBuilder;
use crate::strategy::pool::PartitionPool;
use crate::strategy::FitStrategy;
use crate::{AssignmentResult, EngineError, Strategy};
use fit_registry::Registry;

/// Each process, in order, takes the tightest free partition.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFit;

impl BestFit {
    pub fn new() -> Self {
        Self
    }
}

impl FitStrategy for BestFit {
    fn name(&self) -> &str {
        Strategy::BestFit.name()
    }

    fn allocate(&self, registry: &mut Registry) -> Result<AssignmentResult, EngineError> {
        let mut builder = ResultBuilder::new(Strategy::BestFit);
        let mut pool = PartitionPool::unoccupied(registry);
        let queue: Vec<usize> = (0..registry.process_count())
            .filter(|&idx| registry.partition_of(idx).is_none())
            .collect();

        tracing::debug!(
            "best-fit: {} queued processes, {} free partitions",
            queue.len(),
            pool.len(),
        );

        for process_idx in queue {
            if pool.is_empty() {
                tracing::debug!("best-fit: no free partitions left");
                break;
            }
            let need = registry.processes()[process_idx].size;

            match pool.smallest_fitting(need) {
                Some(pos) => {
                    let partition_idx = pool.take(pos);
                    builder.link(registry, process_idx, partition_idx)?;
                }
                None => {
                    tracing::warn!(
                        "best-fit: no free partition fits process '{}' ({need}); left unassigned",
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
    fn test_best_fit_textbook_scenario() {
        let mut r = registry(&[100, 50, 200], &[80, 30]);
        let result = BestFit::new().allocate(&mut r).unwrap();

        assert_eq!(r.partition_of(0), Some(0));
        assert_eq!(r.partition_of(1), Some(1));
        assert_eq!(r.occupant_of(2), None);
        result.validate(&r).unwrap();
    }

    #[test]
    fn test_best_fit_picks_tightest() {
        let mut r = registry(&[300, 600, 350, 200, 750, 125], &[115, 500, 358, 200, 375]);
        BestFit::new().allocate(&mut r).unwrap();

        assert_eq!(r.partition_of(0), Some(5)); // 115 → 125
        assert_eq!(r.partition_of(1), Some(1)); // 500 → 600
        assert_eq!(r.partition_of(2), Some(4)); // 358 → 750
        assert_eq!(r.partition_of(3), Some(3)); // 200 → 200 (exact)
        assert_eq!(r.partition_of(4), None); // 375: only 300, 350 left
    }

    #[test]
    fn test_best_fit_exact_match_short_circuits() {
        let mut r = registry(&[45, 40, 40], &[40]);
        let result = BestFit::new().allocate(&mut r).unwrap();
        assert_eq!(result.steps[0].partition, PartitionId(1));
    }

    #[test]
    fn test_best_fit_tie_goes_to_first_partition() {
        let mut r = registry(&[90, 60, 60, 60], &[55]);
        BestFit::new().allocate(&mut r).unwrap();
        assert_eq!(r.partition_of(0), Some(1));
    }

    #[test]
    fn test_best_fit_queue_order_not_resorted() {
        // Small process first takes the 10; the 10-sized process then needs 20.
        let mut r = registry(&[20, 10], &[5, 10]);
        BestFit::new().allocate(&mut r).unwrap();
        assert_eq!(r.partition_of(0), Some(1));
        assert_eq!(r.partition_of(1), Some(0));
    }

    #[test]
    fn test_best_fit_unplaceable_head_is_skipped() {
        let mut r = registry(&[10, 5], &[10, 10]);
        let result = BestFit::new().allocate(&mut r).unwrap();

        assert_eq!(r.partition_of(0), Some(0));
        assert_eq!(r.partition_of(1), None);
        assert_eq!(result.num_assigned(), 1);
        result.validate(&r).unwrap();
    }

    #[test]
    fn test_best_fit_exact_matches() {
        let mut r = registry(&[5, 5], &[5, 5]);
        let result = BestFit::new().allocate(&mut r).unwrap();
        assert_eq!(result.num_assigned(), 2);
        assert_eq!(result.stats.idle_partitions, 0);
    }
}
