// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the simulator.

/// Errors that can occur while collecting input, running, or reporting.
#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    /// Raw input text could not be parsed.
    #[error("invalid input: {0}")]
    Input(#[from] fit_registry::InputError),

    /// The registry rejected the scenario.
    #[error("registry error: {0}")]
    Registry(#[from] fit_registry::RegistryError),

    /// The engine hit an internal-consistency fault.
    #[error("engine fault: {0}")]
    Engine(#[from] fit_engine::EngineError),

    /// Configuration file error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The interactive prompt was cancelled or failed.
    #[error("input aborted: {0}")]
    Prompt(String),

    /// Report serialisation failed.
    #[error("serialise error: {0}")]
    Serialize(String),
}

impl SimulatorError {
    /// Returns `true` if the user can fix this by changing their input.
    pub fn is_user_error(&self) -> bool {
        match self {
            SimulatorError::Input(_) | SimulatorError::Config(_) => true,
            SimulatorError::Registry(e) => !e.is_internal(),
            _ => false,
        }
    }
}
