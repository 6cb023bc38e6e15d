// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The registry: immutable partition/process records plus the mutable
//! assignment relation between them.
//!
//! # Representation
//!
//! ```text
//! partitions: [Q0, Q1, Q2]        processes: [P0, P1]
//! assignment: [Some(0), Some(1)]  (process index → partition index)
//! occupant:   [Some(0), Some(1), None]   (inverse, kept in lock-step)
//! ```
//!
//! Records never point at each other. Both maps are updated only through
//! [`Registry::assign`], which enforces the relation's invariants:
//! injective in both directions and `size(process) <= size(partition)`.

use crate::record::default_process_id;
use crate::{InputError, Partition, PartitionId, Process, ProcessSpec, RegistryError, Snapshot};
use std::collections::HashSet;

/// All records for one allocation run.
#[derive(Debug, Clone)]
pub struct Registry {
    partitions: Vec<Partition>,
    processes: Vec<Process>,
    assignment: Vec<Option<usize>>,
    occupant: Vec<Option<usize>>,
}

impl Registry {
    /// Validates the input and builds a registry with an empty assignment.
    ///
    /// # Checks
    /// - At least one partition, every size positive, total capacity
    ///   representable as `u64`.
    /// - Every process size positive; explicit ids non-empty and unique
    ///   (generated ids take part in the uniqueness check too).
    /// - `processes.len() <= partition_sizes.len()`.
    /// - Every process fits the largest partition.
    pub fn build(
        partition_sizes: &[u64],
        processes: Vec<ProcessSpec>,
    ) -> Result<Self, RegistryError> {
        if partition_sizes.is_empty() {
            return Err(InputError::NoPartitions.into());
        }

        let mut partitions = Vec::with_capacity(partition_sizes.len());
        let mut capacity: u64 = 0;
        for (index, &size) in partition_sizes.iter().enumerate() {
            if size == 0 {
                return Err(InputError::ZeroPartitionSize { index: index + 1 }.into());
            }
            capacity = capacity.checked_add(size).ok_or(InputError::CapacityOverflow)?;
            partitions.push(Partition {
                id: PartitionId(index),
                size,
            });
        }

        if processes.len() > partitions.len() {
            return Err(InputError::TooManyProcesses {
                processes: processes.len(),
                partitions: partitions.len(),
            }
            .into());
        }

        let largest = partition_sizes.iter().copied().max().unwrap_or(0);
        let mut seen = HashSet::with_capacity(processes.len());
        let mut records = Vec::with_capacity(processes.len());

        for (index, spec) in processes.into_iter().enumerate() {
            let id = match spec.id {
                Some(id) if id.trim().is_empty() => {
                    return Err(InputError::EmptyProcessId {
                        position: index + 1,
                    }
                    .into());
                }
                Some(id) => id,
                None => default_process_id(index),
            };

            if !seen.insert(id.clone()) {
                return Err(InputError::DuplicateProcessId { id }.into());
            }
            if spec.size == 0 {
                return Err(InputError::ZeroProcessSize { id }.into());
            }
            if spec.size > largest {
                return Err(InputError::ProcessTooLarge {
                    id,
                    size: spec.size,
                    largest,
                }
                .into());
            }

            records.push(Process {
                index,
                id,
                size: spec.size,
            });
        }

        Ok(Self {
            assignment: vec![None; records.len()],
            occupant: vec![None; partitions.len()],
            partitions,
            processes: records,
        })
    }

    /// Links process `process_idx` to partition `partition_idx`.
    ///
    /// Fails with [`RegistryError::AlreadyAssigned`] if either side is
    /// already linked, or [`RegistryError::SizeMismatch`] if the process
    /// is larger than the partition. On failure nothing changes.
    pub fn assign(
        &mut self,
        process_idx: usize,
        partition_idx: usize,
    ) -> Result<(), RegistryError> {
        let process = self.process_checked(process_idx)?;
        let partition = self.partition_checked(partition_idx)?;

        if self.assignment[process_idx].is_some() || self.occupant[partition_idx].is_some() {
            return Err(RegistryError::AlreadyAssigned {
                process: process.id.clone(),
                partition: partition.id,
            });
        }
        if process.size > partition.size {
            return Err(RegistryError::SizeMismatch {
                process: process.id.clone(),
                process_size: process.size,
                partition: partition.id,
                partition_size: partition.size,
            });
        }

        self.assignment[process_idx] = Some(partition_idx);
        self.occupant[partition_idx] = Some(process_idx);
        Ok(())
    }

    /// Clears every link so the same records can be allocated again.
    pub fn reset(&mut self) {
        self.assignment.iter_mut().for_each(|slot| *slot = None);
        self.occupant.iter_mut().for_each(|slot| *slot = None);
    }

    /// Read-only reporting views over the current assignment.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self)
    }

    /// Returns the number of partitions.
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Returns the number of processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Returns the partition at `idx`, if any.
    pub fn partition(&self, idx: usize) -> Option<&Partition> {
        self.partitions.get(idx)
    }

    /// Returns the process at `idx`, if any.
    pub fn process(&self, idx: usize) -> Option<&Process> {
        self.processes.get(idx)
    }

    /// Size of the largest partition. A built registry always has one.
    pub fn largest_partition(&self) -> u64 {
        self.partitions.iter().map(|p| p.size).max().unwrap_or(0)
    }

    /// Partition index holding process `process_idx`.
    pub fn partition_of(&self, process_idx: usize) -> Option<usize> {
        self.assignment.get(process_idx).copied().flatten()
    }

    /// Process index held by partition `partition_idx`.
    pub fn occupant_of(&self, partition_idx: usize) -> Option<usize> {
        self.occupant.get(partition_idx).copied().flatten()
    }

    /// Returns the number of linked pairs.
    pub fn assigned_count(&self) -> usize {
        self.assignment.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns `true` if no process is linked yet.
    pub fn is_unassigned(&self) -> bool {
        self.assignment.iter().all(Option::is_none)
    }

    fn process_checked(&self, idx: usize) -> Result<&Process, RegistryError> {
        self.processes.get(idx).ok_or(RegistryError::IndexOutOfRange {
            kind: "process",
            index: idx,
            len: self.processes.len(),
        })
    }

    fn partition_checked(&self, idx: usize) -> Result<&Partition, RegistryError> {
        self.partitions.get(idx).ok_or(RegistryError::IndexOutOfRange {
            kind: "partition",
            index: idx,
            len: self.partitions.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(sizes: &[u64]) -> Vec<ProcessSpec> {
        sizes.iter().map(|&s| ProcessSpec::anonymous(s)).collect()
    }

    fn sample() -> Registry {
        Registry::build(&[100, 50, 200], specs(&[80, 30])).unwrap()
    }

    #[test]
    fn test_build_assigns_input_order() {
        let r = sample();
        assert_eq!(r.partition_count(), 3);
        assert_eq!(r.process_count(), 2);
        assert_eq!(r.partition(1).unwrap().size, 50);
        assert_eq!(r.partition(2).unwrap().id, PartitionId(2));
        assert_eq!(r.process(0).unwrap().id, "P1");
        assert_eq!(r.process(1).unwrap().size, 30);
        assert_eq!(r.largest_partition(), 200);
        assert!(r.is_unassigned());
    }

    #[test]
    fn test_build_keeps_explicit_ids() {
        let r = Registry::build(
            &[10, 10],
            vec![ProcessSpec::new("shell", 4), ProcessSpec::anonymous(2)],
        )
        .unwrap();
        assert_eq!(r.process(0).unwrap().id, "shell");
        assert_eq!(r.process(1).unwrap().id, "P2");
    }

    #[test]
    fn test_build_no_partitions() {
        let err = Registry::build(&[], vec![]).unwrap_err();
        assert_eq!(err, RegistryError::InvalidInput(InputError::NoPartitions));
    }

    #[test]
    fn test_build_zero_partition() {
        let err = Registry::build(&[10, 0], vec![]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidInput(InputError::ZeroPartitionSize { index: 2 })
        );
    }

    #[test]
    fn test_build_capacity_overflow() {
        let err = Registry::build(&[u64::MAX / 2 + 1; 2], vec![ProcessSpec::anonymous(1)])
            .unwrap_err();
        assert_eq!(err, RegistryError::InvalidInput(InputError::CapacityOverflow));

        let r = Registry::build(&[u64::MAX - 1, 1], vec![]).unwrap();
        assert_eq!(r.largest_partition(), u64::MAX - 1);
    }

    #[test]
    fn test_build_zero_process() {
        let err = Registry::build(&[10], specs(&[0])).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::InvalidInput(InputError::ZeroProcessSize { .. })
        ));
    }

    #[test]
    fn test_build_empty_id() {
        let err = Registry::build(&[10], vec![ProcessSpec::new("  ", 1)]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidInput(InputError::EmptyProcessId { position: 1 })
        );
    }

    #[test]
    fn test_build_duplicate_id() {
        let err = Registry::build(
            &[10, 10],
            vec![ProcessSpec::new("a", 1), ProcessSpec::new("a", 2)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidInput(InputError::DuplicateProcessId { id: "a".into() })
        );
    }

    #[test]
    fn test_build_explicit_id_collides_with_generated() {
        let err = Registry::build(
            &[10, 10],
            vec![ProcessSpec::anonymous(1), ProcessSpec::new("P1", 2)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::InvalidInput(InputError::DuplicateProcessId { .. })
        ));
    }

    #[test]
    fn test_build_too_many_processes() {
        let err = Registry::build(&[10], specs(&[1, 1])).unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidInput(InputError::TooManyProcesses {
                processes: 2,
                partitions: 1
            })
        );
    }

    #[test]
    fn test_build_process_exceeds_largest_partition() {
        let err = Registry::build(&[10], specs(&[20])).unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidInput(InputError::ProcessTooLarge {
                id: "P1".into(),
                size: 20,
                largest: 10
            })
        );
        assert!(!err.is_internal());
    }

    #[test]
    fn test_assign_links_both_sides() {
        let mut r = sample();
        r.assign(0, 2).unwrap();
        assert_eq!(r.partition_of(0), Some(2));
        assert_eq!(r.occupant_of(2), Some(0));
        assert_eq!(r.partition_of(1), None);
        assert_eq!(r.occupant_of(0), None);
        assert_eq!(r.assigned_count(), 1);
    }

    #[test]
    fn test_assign_rejects_taken_partition() {
        let mut r = sample();
        r.assign(0, 0).unwrap();
        let err = r.assign(1, 0).unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyAssigned { .. }));
        assert!(err.is_internal());
        assert_eq!(r.partition_of(1), None);
    }

    #[test]
    fn test_assign_rejects_assigned_process() {
        let mut r = sample();
        r.assign(0, 0).unwrap();
        let err = r.assign(0, 2).unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyAssigned { .. }));
        assert_eq!(r.occupant_of(2), None);
    }

    #[test]
    fn test_assign_rejects_size_mismatch() {
        let mut r = sample();
        let err = r.assign(0, 1).unwrap_err();
        assert_eq!(
            err,
            RegistryError::SizeMismatch {
                process: "P1".into(),
                process_size: 80,
                partition: PartitionId(1),
                partition_size: 50,
            }
        );
        assert!(r.is_unassigned());
    }

    #[test]
    fn test_assign_exact_fit() {
        let mut r = Registry::build(&[5], specs(&[5])).unwrap();
        r.assign(0, 0).unwrap();
        assert_eq!(r.assigned_count(), 1);
    }

    #[test]
    fn test_assign_out_of_range() {
        let mut r = sample();
        assert!(matches!(
            r.assign(5, 0),
            Err(RegistryError::IndexOutOfRange { kind: "process", .. })
        ));
        assert!(matches!(
            r.assign(0, 3),
            Err(RegistryError::IndexOutOfRange { kind: "partition", .. })
        ));
    }

    #[test]
    fn test_reset_clears_links() {
        let mut r = sample();
        r.assign(0, 0).unwrap();
        r.assign(1, 1).unwrap();
        r.reset();
        assert!(r.is_unassigned());
        assert_eq!(r.occupant_of(0), None);
        r.assign(1, 0).unwrap();
    }
}
