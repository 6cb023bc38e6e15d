// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Rendering of run outcomes as text tables or JSON.
//!
//! Unassigned slots print as [`NONE`] in text and `null` in JSON.

use crate::{Outcome, SimulatorError};
use fit_engine::{AssignmentStats, AssignmentStep, Strategy};
use fit_registry::{format_size, Snapshot};

/// Text sentinel for an empty slot.
pub const NONE: &str = "(none)";

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

/// Renders rows under headers with columns padded to their widest cell.
fn table(headers: &[(&str, Align)], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, (h, _))| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(headers)
            .zip(&widths)
            .map(|((cell, (_, align)), &w)| match align {
                Align::Left => format!("{cell:<w$}"),
                Align::Right => format!("{cell:>w$}"),
            })
            .collect();
        format!("  {}", padded.join("  ").trim_end())
    };

    let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    let mut out = String::new();
    out.push_str(&line(headers.iter().map(|(h, _)| *h).collect()));
    out.push('\n');
    out.push_str(&format!("  {}\n", "-".repeat(total)));
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

/// Per-process and per-partition tables, the steps in link order, then
/// the stats line.
pub fn render_text(outcome: &Outcome) -> String {
    let snapshot = outcome.snapshot();

    let process_rows: Vec<Vec<String>> = snapshot
        .processes()
        .map(|row| {
            vec![
                row.process_id.to_string(),
                format_size(row.process_size),
                row.partition.map_or_else(|| NONE.to_string(), |p| p.to_string()),
            ]
        })
        .collect();

    let partition_rows: Vec<Vec<String>> = snapshot
        .partitions()
        .map(|row| {
            vec![
                row.partition.to_string(),
                format_size(row.partition_size),
                row.process_id.unwrap_or(NONE).to_string(),
            ]
        })
        .collect();

    let step_rows: Vec<Vec<String>> = outcome
        .result
        .steps
        .iter()
        .map(|step| {
            vec![
                (step.step + 1).to_string(),
                step.process_id.clone(),
                step.partition.to_string(),
                format_size(step.slack()),
            ]
        })
        .collect();

    let mut out = format!("  Strategy: {}\n\n", outcome.strategy().title());
    out.push_str(&table(
        &[
            ("Process", Align::Left),
            ("Size", Align::Right),
            ("Partition", Align::Left),
        ],
        &process_rows,
    ));
    out.push('\n');
    out.push_str(&table(
        &[
            ("Partition", Align::Left),
            ("Size", Align::Right),
            ("Process", Align::Left),
        ],
        &partition_rows,
    ));
    out.push('\n');

    if !step_rows.is_empty() {
        out.push_str(&table(
            &[
                ("Step", Align::Right),
                ("Process", Align::Left),
                ("Partition", Align::Left),
                ("Slack", Align::Right),
            ],
            &step_rows,
        ));
        out.push('\n');
    }

    out.push_str(&format!("  {}\n", outcome.result.stats.summary()));
    out
}

#[derive(serde::Serialize)]
struct Report<'a> {
    strategy: Strategy,
    assignment: Snapshot<'a>,
    steps: &'a [AssignmentStep],
    stats: &'a AssignmentStats,
}

/// Pretty-printed JSON for one outcome.
pub fn render_json(outcome: &Outcome) -> Result<String, SimulatorError> {
    let report = Report {
        strategy: outcome.strategy(),
        assignment: outcome.snapshot(),
        steps: &outcome.result.steps,
        stats: &outcome.result.stats,
    };
    serde_json::to_string_pretty(&report).map_err(|e| SimulatorError::Serialize(e.to_string()))
}

/// Side-by-side stats for several outcomes.
pub fn render_comparison(outcomes: &[Outcome]) -> String {
    let rows: Vec<Vec<String>> = outcomes
        .iter()
        .map(|o| {
            let s = &o.result.stats;
            let placements: Vec<String> = o
                .snapshot()
                .processes()
                .map(|row| {
                    let target = row.partition.map_or_else(|| NONE.to_string(), |p| p.to_string());
                    format!("{}→{target}", row.process_id)
                })
                .collect();
            vec![
                o.strategy().title().to_string(),
                s.assigned_processes.to_string(),
                s.unassigned_processes.to_string(),
                s.idle_partitions.to_string(),
                s.internal_fragmentation.to_string(),
                format!("{:.0}%", s.utilization() * 100.0),
                placements.join(" "),
            ]
        })
        .collect();

    table(
        &[
            ("Strategy", Align::Left),
            ("Assigned", Align::Right),
            ("Unassigned", Align::Right),
            ("Idle", Align::Right),
            ("Fragmentation", Align::Right),
            ("Util.", Align::Right),
            ("Placement", Align::Left),
        ],
        &rows,
    )
}
