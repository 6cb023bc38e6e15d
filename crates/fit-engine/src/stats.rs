// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Aggregate statistics over a finished assignment.
//!
//! [`AssignmentStats`] is what makes strategies comparable: how many
//! processes were placed, how much capacity sits idle, and how much is
//! wasted inside occupied partitions (internal fragmentation).

use fit_registry::Registry;

/// Summary numbers for one allocation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct AssignmentStats {
    /// Processes holding a partition.
    pub assigned_processes: usize,
    /// Processes left without a partition.
    pub unassigned_processes: usize,
    /// Partitions left empty.
    pub idle_partitions: usize,
    /// Sum of all partition sizes.
    pub total_capacity: u64,
    /// Sum of sizes of occupied partitions.
    pub occupied_capacity: u64,
    /// Sum of sizes of assigned processes.
    pub resident_size: u64,
    /// `occupied_capacity - resident_size`.
    pub internal_fragmentation: u64,
}

impl AssignmentStats {
    /// Computes stats from the registry's current assignment.
    ///
    /// Sums saturate at `u64::MAX`; a built registry never gets there.
    pub fn from_registry(registry: &Registry) -> Self {
        let mut stats = Self::default();

        for partition in registry.partitions() {
            let size = partition.size;
            stats.total_capacity = stats.total_capacity.saturating_add(size);
            match registry.occupant_of(partition.id.index()) {
                Some(_) => stats.occupied_capacity = stats.occupied_capacity.saturating_add(size),
                None => stats.idle_partitions += 1,
            }
        }

        for process in registry.processes() {
            if registry.partition_of(process.index).is_some() {
                stats.assigned_processes += 1;
                stats.resident_size = stats.resident_size.saturating_add(process.size);
            } else {
                stats.unassigned_processes += 1;
            }
        }

        stats.internal_fragmentation = stats.occupied_capacity.saturating_sub(stats.resident_size);
        stats
    }

    /// Fraction of total capacity filled by resident processes, in `[0.0, 1.0]`.
    pub fn utilization(&self) -> f64 {
        if self.total_capacity == 0 {
            return 0.0;
        }
        self.resident_size as f64 / self.total_capacity as f64
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{} assigned, {} unassigned, {} idle partitions, \
             {}/{} capacity resident ({:.0}% utilization), {} internal fragmentation",
            self.assigned_processes,
            self.unassigned_processes,
            self.idle_partitions,
            self.resident_size,
            self.total_capacity,
            self.utilization() * 100.0,
            self.internal_fragmentation,
        )
    }
}
