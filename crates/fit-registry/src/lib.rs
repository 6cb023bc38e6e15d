// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # fit-registry
//!
//! The data model for fixed-partition allocation: partitions, processes,
//! and the partial injective relation between them.
//!
//! # Key Components
//!
//! - [`Registry`]: owns every [`Partition`] and [`Process`] for one run,
//!   validates raw input on [`Registry::build`] and guards the assignment
//!   relation in [`Registry::assign`].
//! - [`Snapshot`]: borrowed per-process and per-partition views for
//!   reporting.
//! - [`parse_size`]: human-readable size strings (`"64K"`, `"2M"`).
//!
//! # Ownership Model
//!
//! ```text
//! Registry
//!   ├── partitions: Vec<Partition>      (input order, never resized)
//!   ├── processes:  Vec<Process>        (input order, never resized)
//!   └── process idx ──► partition idx   (and the inverse)
//! ```
//!
//! Links are plain indices, so dropping the registry drops both sides of
//! every assignment together.
//!
//! # Example
//! ```
//! use fit_registry::{ProcessSpec, Registry};
//!
//! let mut registry = Registry::build(
//!     &[100, 50, 200],
//!     vec![ProcessSpec::new("editor", 80), ProcessSpec::anonymous(30)],
//! )
//! .unwrap();
//!
//! registry.assign(0, 0).unwrap();
//! assert!(registry.assign(1, 0).is_err()); // partition already taken
//!
//! let rows: Vec<_> = registry.snapshot().partitions().collect();
//! assert_eq!(rows[0].process_id, Some("editor"));
//! assert_eq!(rows[1].process_id, None);
//! ```

mod error;
mod record;
mod registry;
mod size;
mod snapshot;

pub use error::{InputError, RegistryError};
pub use record::{Partition, PartitionId, Process, ProcessSpec};
pub use registry::Registry;
pub use size::{format_size, parse_size};
pub use snapshot::{PartitionRow, ProcessRow, Snapshot};
