// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # simulator
//!
//! Everything around the fit engine that turns user input into a printed
//! result:
//!
//! ```text
//! SimulationConfig (TOML) ─┐
//! Collector<Prompter>  ────┼──► Scenario ──► run / compare ──► Outcome ──► report
//! CLI lists            ────┘       │                │
//!                                  ▼                ▼
//!                         Registry::build    fit_engine::allocate
//! ```
//!
//! - A [`Scenario`] is unvalidated input. Validation happens once, in
//!   [`fit_registry::Registry::build`], so every entry point shares the
//!   same rules.
//! - [`run`] and [`compare`] never retry; the [`Collector`] is the only
//!   place that asks again after bad input.
//! - [`report`] renders outcomes as text tables or JSON.

mod collector;
mod config;
mod error;
pub mod report;
mod run;
mod scenario;

pub use collector::{parse_count, Collector, Prompter};
pub use config::{ProcessEntry, SimulationConfig, SizeValue};
pub use error::SimulatorError;
pub use run::{compare, run, run_with, Outcome};
pub use scenario::{parse_partition_list, parse_process_list, Scenario};
