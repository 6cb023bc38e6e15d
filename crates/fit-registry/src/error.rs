// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the partition/process registry.

use crate::PartitionId;

/// A rejected piece of raw input.
///
/// These are collector-side failures: the `Display` text doubles as the
/// corrective message shown when the user is asked to try again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// At least one partition is required.
    #[error("at least one partition is required")]
    NoPartitions,

    /// A partition was given a size of zero.
    #[error("partition {index} must have a positive size")]
    ZeroPartitionSize { index: usize },

    /// A process was given a size of zero.
    #[error("process '{id}' must have a positive size")]
    ZeroProcessSize { id: String },

    /// A process id was supplied but is blank.
    #[error("process {position} has an empty id")]
    EmptyProcessId { position: usize },

    /// Two processes share the same id.
    #[error("process id '{id}' is already in use")]
    DuplicateProcessId { id: String },

    /// Partition sizes add up to more than a `u64` can hold.
    #[error("total partition capacity exceeds the 64-bit limit; use smaller partitions")]
    CapacityOverflow,

    /// More processes than partitions.
    #[error("process count ({processes}) must not exceed partition count ({partitions})")]
    TooManyProcesses { processes: usize, partitions: usize },

    /// A process cannot fit even the largest partition.
    #[error("process '{id}' of size {size} cannot exceed the largest partition ({largest})")]
    ProcessTooLarge { id: String, size: u64, largest: u64 },

    /// Raw text that is not a positive integer (with optional size suffix).
    #[error("'{raw}' is not a positive integer; expected e.g. 100, 64K, 2M")]
    NotAPositiveInteger { raw: String },

    /// A strategy selector nobody recognises.
    #[error("unknown strategy '{raw}'; expected 'first-fit', 'best-fit' or 'worst-fit'")]
    UnknownStrategy { raw: String },
}

/// Errors raised by [`crate::Registry`] operations.
///
/// Only [`RegistryError::InvalidInput`] is a user error. The remaining
/// variants signal a broken invariant in whoever drives the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Input failed validation in [`crate::Registry::build`].
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Either the process or the partition already holds a link.
    #[error("process '{process}' cannot take partition {partition}: one side is already assigned")]
    AlreadyAssigned {
        process: String,
        partition: PartitionId,
    },

    /// The process does not fit in the partition.
    #[error(
        "process '{process}' ({process_size}) does not fit partition {partition} ({partition_size})"
    )]
    SizeMismatch {
        process: String,
        process_size: u64,
        partition: PartitionId,
        partition_size: u64,
    },

    /// An index outside the registry was used.
    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },
}

impl RegistryError {
    /// Returns `true` for failures that indicate a defect in strategy
    /// logic rather than bad user input.
    pub fn is_internal(&self) -> bool {
        !matches!(self, RegistryError::InvalidInput(_))
    }
}
