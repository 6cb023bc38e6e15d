// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The pool of still-free partitions used by Best-Fit and Worst-Fit.
//!
//! Entries stay in partition input order and removal preserves that
//! order, so "first encountered" always means "lowest partition index".

use fit_registry::Registry;

#[derive(Debug, Clone)]
pub(crate) struct PartitionPool {
    /// `(partition index, size)` for every unoccupied partition.
    entries: Vec<(usize, u64)>,
}

impl PartitionPool {
    /// Collects every partition that has no occupant yet.
    pub fn unoccupied(registry: &Registry) -> Self {
        let entries = registry
            .partitions()
            .iter()
            .filter(|q| registry.occupant_of(q.id.index()).is_none())
            .map(|q| (q.id.index(), q.size))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the smallest partition with `size >= need`.
    ///
    /// An exact match is returned as soon as it is seen. Otherwise ties on
    /// the minimal size go to the earliest entry.
    pub fn smallest_fitting(&self, need: u64) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for (pos, &(_, size)) in self.entries.iter().enumerate() {
            if size == need {
                return Some(pos);
            }
            if size > need && best.map_or(true, |(_, best_size)| size < best_size) {
                best = Some((pos, size));
            }
        }
        best.map(|(pos, _)| pos)
    }

    /// Position of the largest partition, earliest entry on ties.
    pub fn largest(&self) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for (pos, &(_, size)) in self.entries.iter().enumerate() {
            if best.map_or(true, |(_, best_size)| size > best_size) {
                best = Some((pos, size));
            }
        }
        best.map(|(pos, _)| pos)
    }

    /// Size of the entry at `pos`.
    pub fn size_at(&self, pos: usize) -> u64 {
        self.entries[pos].1
    }

    /// Removes the entry at `pos` and returns its partition index.
    pub fn take(&mut self, pos: usize) -> usize {
        self.entries.remove(pos).0
    }
}
