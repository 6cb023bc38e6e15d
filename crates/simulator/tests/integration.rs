// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: config → scenario → registry → engine → report.

use fit_engine::Strategy;
use fit_registry::{InputError, PartitionId, ProcessSpec, RegistryError};
use simulator::{
    compare, parse_partition_list, parse_process_list, report, run, Scenario, SimulationConfig,
    SimulatorError,
};

// ── Helpers ────────────────────────────────────────────────────

fn scenario(partitions: &[u64], processes: &[u64], strategy: Strategy) -> Scenario {
    Scenario::new(
        partitions.to_vec(),
        processes.iter().map(|&s| ProcessSpec::anonymous(s)).collect(),
        strategy,
    )
}

fn placements(s: &Scenario) -> Vec<Option<PartitionId>> {
    run(s)
        .unwrap()
        .snapshot()
        .processes()
        .map(|row| row.partition)
        .collect()
}

// ── Reference scenarios ────────────────────────────────────────

#[test]
fn test_first_fit_reference() {
    let s = scenario(&[100, 50, 200], &[80, 30], Strategy::FirstFit);
    assert_eq!(placements(&s), vec![Some(PartitionId(0)), Some(PartitionId(1))]);
}

#[test]
fn test_best_fit_reference() {
    let s = scenario(&[100, 50, 200], &[80, 30], Strategy::BestFit);
    assert_eq!(placements(&s), vec![Some(PartitionId(0)), Some(PartitionId(1))]);
}

#[test]
fn test_worst_fit_reference() {
    let s = scenario(&[100, 50, 200], &[80, 30], Strategy::WorstFit);
    assert_eq!(placements(&s), vec![Some(PartitionId(2)), Some(PartitionId(0))]);
}

#[test]
fn test_oversize_process_is_rejected_before_engine() {
    let s = scenario(&[10], &[20], Strategy::FirstFit);
    let err = run(&s).unwrap_err();
    assert!(matches!(
        err,
        SimulatorError::Registry(RegistryError::InvalidInput(InputError::ProcessTooLarge { .. }))
    ));
    assert!(err.is_user_error());
}

#[test]
fn test_equal_sizes_fill_everything() {
    for strategy in Strategy::ALL {
        let outcome = run(&scenario(&[5, 5], &[5, 5], strategy)).unwrap();
        assert!(outcome.snapshot().partitions().all(|row| row.process_id.is_some()));
        assert_eq!(outcome.result.stats.internal_fragmentation, 0);
    }
}

// ── Config-driven pipeline ─────────────────────────────────────

#[test]
fn test_config_to_report() {
    let config = SimulationConfig::from_toml(
        r#"
strategy = "best-fit"
partitions = [300, 600, 350, 200, 750, 125]

[[processes]]
id = "compiler"
size = 115

[[processes]]
id = "browser"
size = 500

[[processes]]
id = "db"
size = 358

[[processes]]
id = "cache"
size = 200

[[processes]]
id = "indexer"
size = 375
"#,
    )
    .unwrap();

    let outcome = run(&config.scenario().unwrap()).unwrap();
    assert_eq!(outcome.result.partition_for("compiler"), Some(PartitionId(5)));
    assert_eq!(outcome.result.partition_for("cache"), Some(PartitionId(3)));
    assert_eq!(outcome.result.partition_for("indexer"), None);

    let text = report::render_text(&outcome);
    assert!(text.contains("Best-Fit"));
    assert!(text.lines().any(|l| l.starts_with("  indexer") && l.ends_with(report::NONE)));

    let json: serde_json::Value =
        serde_json::from_str(&report::render_json(&outcome).unwrap()).unwrap();
    assert_eq!(json["strategy"], "best-fit");
    assert_eq!(json["stats"]["unassigned_processes"], 1);
}

#[test]
fn test_compare_from_inline_lists() {
    let partitions = parse_partition_list("100,50,200").unwrap();
    let processes = parse_process_list("a=80,b=30").unwrap();
    let outcomes = compare(&Scenario::new(partitions, processes, Strategy::FirstFit)).unwrap();

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[2].result.partition_for("a"), Some(PartitionId(2)));
    let table = report::render_comparison(&outcomes);
    assert_eq!(table.lines().count(), 2 + 3);
}
