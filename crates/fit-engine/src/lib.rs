// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # fit-engine
//!
//! Assigns processes to fixed memory partitions using one of three
//! classical policies.
//!
//! # Strategies
//!
//! | Strategy | Drives the scan | Picks | Ties |
//! |---|---|---|---|
//! | [`FirstFit`] | partitions, in order | first free process that fits | n/a |
//! | [`BestFit`] | process queue, in order | smallest free partition that fits | lowest index |
//! | [`WorstFit`] | process queue, in order | largest free partition | lowest index |
//!
//! # Invariants
//!
//! After any step, and therefore after every run:
//! - no partition or process takes part in more than one link;
//! - every linked process fits its partition;
//! - links are only ever added.
//!
//! The [`fit_registry::Registry`] enforces these on every `assign`; a
//! violation surfaces as [`EngineError`] and aborts the run.
//!
//! # Example
//! ```
//! use fit_engine::{allocate, Strategy};
//! use fit_registry::{PartitionId, ProcessSpec, Registry};
//!
//! let mut registry = Registry::build(
//!     &[100, 50, 200],
//!     vec![ProcessSpec::anonymous(80), ProcessSpec::anonymous(30)],
//! )
//! .unwrap();
//!
//! let result = allocate(Strategy::WorstFit, &mut registry).unwrap();
//! assert_eq!(result.partition_for("P1"), Some(PartitionId(2)));
//! assert_eq!(result.partition_for("P2"), Some(PartitionId(0)));
//! println!("{}", result.summary());
//! ```

mod error;
pub(crate) mod result;
mod stats;
pub mod strategy;

pub use error::EngineError;
pub use result::{AssignmentResult, AssignmentStep};
pub use stats::AssignmentStats;
pub use strategy::best_fit::BestFit;
pub use strategy::first_fit::FirstFit;
pub use strategy::worst_fit::WorstFit;
pub use strategy::{FitStrategy, Strategy};

use fit_registry::Registry;

/// Runs `strategy` over `registry` and validates the outcome.
///
/// The registry is expected to satisfy the input preconditions already
/// (it can only be obtained through [`Registry::build`]). Processes that no
/// free partition can hold are left unassigned; any error returned here is
/// an internal-consistency fault.
pub fn allocate(
    strategy: Strategy,
    registry: &mut Registry,
) -> Result<AssignmentResult, EngineError> {
    tracing::info!(
        "allocating {} processes over {} partitions with {}",
        registry.process_count(),
        registry.partition_count(),
        strategy,
    );

    let result = strategy.fit().allocate(registry).map_err(|e| {
        tracing::error!("{strategy} aborted: {e}");
        e
    })?;

    if let Err(e) = result.validate(registry) {
        tracing::error!("{strategy} produced an invalid assignment: {e}");
        return Err(e);
    }

    tracing::info!("{}", result.summary());
    Ok(result)
}
