// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Reporting views over a [`Registry`].
//!
//! A [`Snapshot`] borrows the registry and yields rows lazily, so taking
//! one neither copies records nor touches the assignment. Unassigned
//! slots are `None`, never an empty string.

use crate::{PartitionId, Registry};
use serde::Serialize;

/// One row of the per-process view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ProcessRow<'a> {
    pub process_id: &'a str,
    pub process_size: u64,
    pub partition: Option<PartitionId>,
}

/// One row of the per-partition view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PartitionRow<'a> {
    pub partition: PartitionId,
    pub partition_size: u64,
    pub process_id: Option<&'a str>,
}

/// Borrowed, read-only view of the assignment relation.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    registry: &'a Registry,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Per-process view, in process input order.
    pub fn processes(&self) -> impl ExactSizeIterator<Item = ProcessRow<'a>> + 'a {
        let registry = self.registry;
        registry.processes().iter().map(move |p| ProcessRow {
            process_id: p.id.as_str(),
            process_size: p.size,
            partition: registry.partition_of(p.index).map(PartitionId),
        })
    }

    /// Per-partition view, in partition input order.
    pub fn partitions(&self) -> impl ExactSizeIterator<Item = PartitionRow<'a>> + 'a {
        let registry = self.registry;
        registry.partitions().iter().map(move |q| PartitionRow {
            partition: q.id,
            partition_size: q.size,
            process_id: registry
                .occupant_of(q.id.index())
                .and_then(|idx| registry.process(idx))
                .map(|p| p.id.as_str()),
        })
    }
}

/// Serialises as `{ "processes": [...], "partitions": [...] }`.
impl serde::Serialize for Snapshot<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SnapshotView {
            processes: ProcessRows(*self),
            partitions: PartitionRows(*self),
        }
        .serialize(serializer)
    }
}

#[derive(serde::Serialize)]
struct SnapshotView<'a> {
    processes: ProcessRows<'a>,
    partitions: PartitionRows<'a>,
}

struct ProcessRows<'a>(Snapshot<'a>);

impl serde::Serialize for ProcessRows<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.processes())
    }
}

struct PartitionRows<'a>(Snapshot<'a>);

impl serde::Serialize for PartitionRows<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.partitions())
    }
}
