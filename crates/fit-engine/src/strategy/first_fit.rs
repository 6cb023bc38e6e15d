// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! First-Fit strategy.
//!
//! Walks partitions in input order. Each free partition takes the first
//! free process (in input order) that fits, then the walk moves on. One
//! forward pass, no backtracking: `O(partitions × processes)`.
//!
//! Note that the outer loop is over *partitions*, not processes: a small
//! early partition may take a small late process, leaving an earlier large
//! process to a later partition.

use crate::result::ResultBuilder;
use crate::strategy::FitStrategy;
use crate::{AssignmentResult, EngineError, Strategy};
use fit_registry::Registry;

/// Each partition takes the first process that fits.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

impl FirstFit {
    pub fn new() -> Self {
        Self
    }
}

impl FitStrategy for FirstFit {
    fn name(&self) -> &str {
        Strategy::FirstFit.name()
    }

    fn allocate(&self, registry: &mut Registry) -> Result<AssignmentResult, EngineError> {
        let mut builder = ResultBuilder::new(Strategy::FirstFit);

        for partition_idx in 0..registry.partition_count() {
            if registry.occupant_of(partition_idx).is_some() {
                continue;
            }
            let capacity = registry.partitions()[partition_idx].size;

            let candidate = registry
                .processes()
                .iter()
                .find(|p| registry.partition_of(p.index).is_none() && p.size <= capacity)
                .map(|p| p.index);

            if let Some(process_idx) = candidate {
                builder.link(registry, process_idx, partition_idx)?;
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
    fn test_first_fit_textbook_scenario() {
        let mut r = registry(&[100, 50, 200], &[80, 30]);
        let result = FirstFit::new().allocate(&mut r).unwrap();

        assert_eq!(r.occupant_of(0), Some(0));
        assert_eq!(r.occupant_of(1), Some(1));
        assert_eq!(r.occupant_of(2), None);
        assert_eq!(result.num_assigned(), 2);
        assert_eq!(result.steps[0].partition, PartitionId(0));
        result.validate(&r).unwrap();
    }

    #[test]
    fn test_first_fit_partition_order_drives_scan() {
        // Partition 10 is considered first and takes the later, smaller process.
        let mut r = registry(&[10, 100], &[60, 5]);
        FirstFit::new().allocate(&mut r).unwrap();

        assert_eq!(r.occupant_of(0), Some(1));
        assert_eq!(r.occupant_of(1), Some(0));
    }

    #[test]
    fn test_first_fit_leaves_unplaceable_process() {
        // 90 only fits partition 0, which the earlier 10 grabs first.
        let mut r = registry(&[100, 20], &[10, 90]);
        let result = FirstFit::new().allocate(&mut r).unwrap();

        assert_eq!(r.partition_of(0), Some(0));
        assert_eq!(r.partition_of(1), None);
        assert_eq!(r.occupant_of(1), None);
        assert_eq!(result.stats.unassigned_processes, 1);
        assert_eq!(result.stats.idle_partitions, 1);
    }

    #[test]
    fn test_first_fit_exact_matches() {
        let mut r = registry(&[5, 5], &[5, 5]);
        let result = FirstFit::new().allocate(&mut r).unwrap();
        assert_eq!(result.num_assigned(), 2);
        assert_eq!(result.stats.internal_fragmentation, 0);
    }

    #[test]
    fn test_first_fit_no_processes() {
        let mut r = registry(&[5, 5], &[]);
        let result = FirstFit::new().allocate(&mut r).unwrap();
        assert_eq!(result.num_assigned(), 0);
        assert_eq!(result.stats.idle_partitions, 2);
    }

    #[test]
    fn test_first_fit_respects_existing_links() {
        let mut r = registry(&[100, 50, 200], &[80, 30]);
        r.assign(0, 2).unwrap();
        let result = FirstFit::new().allocate(&mut r).unwrap();

        assert_eq!(result.num_assigned(), 1);
        assert_eq!(r.partition_of(0), Some(2));
        assert_eq!(r.partition_of(1), Some(0));
    }
}
