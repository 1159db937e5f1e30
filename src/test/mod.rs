// DIO-Replay-Plot: Visualizing RPL DIO Replay Mitigation from Simulation Logs
// Copyright (C) 2024-2025 Roland Schmid <roschmi@ethz.ch> and Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! End-to-end tests of the comparison pipeline on log files.
//!
//! Rendering needs system fonts, so these tests stop right before the chart is drawn or check
//! that nothing is drawn at all.

use std::{fs, path::PathBuf};

use tempfile::TempDir;

use crate::{
    compare::{compare_logs, load_events, CompareError},
    config::SimulationConfig,
    cumulative::cumulative_series,
    records::Scenario,
};

const MITIGATION_FALSE_LOG: &str = "\
+0.100000000s 0 RplDioReplaySim:Replay(): [INFO ] Replay attacker sending fake DIO at 0.1s
+1.000000000s 1 RplDioReplaySim:ReceiveFakeDio(): [INFO ] Node 1 accepted DIO seq=1 at 1
+1.100000000s 0 RplDioReplaySim:Replay(): [INFO ] Replay attacker sending fake DIO at 1.1s
+1.500000000s 2 RplDioReplaySim:ReceiveFakeDio(): [INFO ] Node 2 accepted DIO seq=1 at 1.5
+2.000000000s 1 RplDioReplaySim:ReceiveFakeDio(): [INFO ] Node 1 accepted DIO seq=1 at 2
+2.100000000s 0 RplDioReplaySim:Replay(): [INFO ] Replay attacker sending fake DIO at 2.1s
+2.500000000s 2 RplDioReplaySim:ReceiveFakeDio(): [INFO ] Node 2 accepted DIO seq=1 at 2.5
";

const MITIGATION_TRUE_LOG: &str = "\
+0.100000000s 0 RplDioReplaySim:Replay(): [INFO ] Replay attacker sending fake DIO at 0.1s
+1.000000000s 1 RplDioReplaySim:ReceiveFakeDio(): [INFO ] Node 1 accepted DIO seq=1 at 1
+1.500000000s 2 RplDioReplaySim:ReceiveFakeDio(): [INFO ] Node 2 accepted DIO seq=1 at 1.5
+2.000000000s 1 RplDioReplaySim:ReceiveFakeDio(): [INFO ] Node 1 DROPPED replayed DIO seq=1 at 2
+2.500000000s 2 RplDioReplaySim:ReceiveFakeDio(): [INFO ] Node 2 DROPPED replayed DIO seq=1 at 2.5
";

const DROPPED_ONLY_LOG: &str = "\
+2.000000000s 1 RplDioReplaySim:ReceiveFakeDio(): [INFO ] Node 1 DROPPED replayed DIO seq=1 at 2
+2.500000000s 2 RplDioReplaySim:ReceiveFakeDio(): [INFO ] Node 2 DROPPED replayed DIO seq=1 at 2.5
";

fn write_log(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn both_scenarios() {
    let dir = TempDir::new().unwrap();
    let false_log = write_log(&dir, "false.log", MITIGATION_FALSE_LOG);
    let true_log = write_log(&dir, "true.log", MITIGATION_TRUE_LOG);
    let config = SimulationConfig::default();

    let events = load_events(&false_log, &true_log, &config)
        .unwrap()
        .sorted_by_time();
    assert_eq!(events.scenario(Scenario::MitigationDisabled).count(), 4 + 14);
    assert_eq!(events.scenario(Scenario::MitigationEnabled).count(), 2);
    assert!(events.iter().all(|r| r.time <= config.horizon));

    let series = cumulative_series(&events, config.horizon);
    let disabled = &series[0];
    let enabled = &series[1];
    assert_eq!(disabled.total(), 18);
    assert_eq!(enabled.total(), 2);

    for s in &series {
        assert_eq!(s.series.t[0], 0.0);
        assert_eq!(s.series.y[0], 0);
        assert_eq!(s.series.t.last(), Some(&config.horizon));
        assert!(s.series.y.windows(2).all(|w| w[0] <= w[1]));
    }

    // the attack keeps succeeding without mitigation
    assert_eq!(disabled.value_at(2.5), 4);
    assert_eq!(disabled.value_at(5.0), 9);
    assert_eq!(enabled.value_at(5.0), 2);
}

#[test]
fn dropped_only_mitigated_log_aborts() {
    let dir = TempDir::new().unwrap();
    let false_log = write_log(&dir, "false.log", MITIGATION_FALSE_LOG);
    let true_log = write_log(&dir, "true.log", DROPPED_ONLY_LOG);
    let output = dir.path().join("plot.png");

    let result = compare_logs(&false_log, &true_log, &SimulationConfig::default(), &output);
    assert!(matches!(
        result,
        Err(CompareError::NoAcceptedEvents(Scenario::MitigationEnabled))
    ));
    assert!(!output.exists());
}

#[test]
fn empty_mitigated_log_aborts() {
    let dir = TempDir::new().unwrap();
    let false_log = write_log(&dir, "false.log", MITIGATION_FALSE_LOG);
    let true_log = write_log(&dir, "true.log", "");
    let output = dir.path().join("plot.png");

    let result = compare_logs(&false_log, &true_log, &SimulationConfig::default(), &output);
    assert!(matches!(
        result,
        Err(CompareError::NoAcceptedEvents(Scenario::MitigationEnabled))
    ));
    assert!(!output.exists());
}

#[test]
fn missing_log_aborts() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "log", MITIGATION_TRUE_LOG);
    let missing = dir.path().join("missing.log");
    let output = dir.path().join("plot.png");
    let config = SimulationConfig::default();

    // an unreadable log is not extrapolated
    let result = compare_logs(&missing, &log, &config, &output);
    assert!(matches!(
        result,
        Err(CompareError::NoAcceptedEvents(Scenario::MitigationDisabled))
    ));

    let result = compare_logs(&log, &missing, &config, &output);
    assert!(matches!(
        result,
        Err(CompareError::NoAcceptedEvents(Scenario::MitigationEnabled))
    ));
    assert!(!output.exists());
}

#[test]
fn empty_unmitigated_log_is_extrapolated() {
    let dir = TempDir::new().unwrap();
    let false_log = write_log(&dir, "false.log", "");
    let true_log = write_log(&dir, "true.log", MITIGATION_TRUE_LOG);

    let events = load_events(&false_log, &true_log, &SimulationConfig::default()).unwrap();
    assert_eq!(events.scenario(Scenario::MitigationDisabled).count(), 14);
    assert!(events
        .scenario(Scenario::MitigationDisabled)
        .all(|r| !r.origin.is_logged()));
}
