// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the fit engine.
//!
//! Every variant is an internal-consistency fault: the engine only runs
//! over a validated [`fit_registry::Registry`], so reaching one of these
//! means a strategy broke the assignment invariants.

/// Errors that abort an allocation run.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The registry refused a link the strategy tried to make.
    #[error("registry rejected assignment: {0}")]
    Registry(#[from] fit_registry::RegistryError),

    /// The finished assignment failed post-run validation.
    #[error("strategy '{strategy}' produced an inconsistent assignment: {detail}")]
    InconsistentResult { strategy: String, detail: String },
}
