// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Partition and process records.
//!
//! Both are created once per run in input order and never resized. They
//! carry no links to each other: the assignment relation lives in the
//! [`crate::Registry`] as index maps.

use std::fmt;

/// Stable identifier of a partition: its position in input order.
///
/// Displayed 1-based (`#1`, `#2`, ...) to match how partitions are
/// entered; the wrapped value is the 0-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct PartitionId(pub usize);

impl PartitionId {
    /// Returns the 0-based index into the registry.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

/// A fixed-size memory partition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Partition {
    pub id: PartitionId,
    pub size: u64,
}

/// A process with a fixed memory demand.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Process {
    /// Position in input order.
    pub index: usize,
    /// Unique, non-empty identifier.
    pub id: String,
    pub size: u64,
}

/// A process as supplied by the caller, before validation.
///
/// When `id` is `None` the registry generates `P<n>` from the 1-based
/// input position.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProcessSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub size: u64,
}

impl ProcessSpec {
    /// A process with an explicit id.
    pub fn new(id: impl Into<String>, size: u64) -> Self {
        Self {
            id: Some(id.into()),
            size,
        }
    }

    /// A process whose id will be generated from its position.
    pub fn anonymous(size: u64) -> Self {
        Self { id: None, size }
    }
}

/// Generated id for the process at 0-based `index`.
pub(crate) fn default_process_id(index: usize) -> String {
    format!("P{}", index + 1)
}
