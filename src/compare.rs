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
//! Comparison of the two simulation runs, from the log files to the chart.
use std::path::Path;

use crate::{
    chart::{render, ChartError},
    config::SimulationConfig,
    cumulative::{cumulative_series, CumulativeSeries},
    log_parser::parse_log_file,
    records::{EventTable, Scenario},
};

#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("No accepted DIO events found for scenario mitigation={0}")]
    NoAcceptedEvents(Scenario),
    #[error("Chart Error: {0}")]
    Chart(#[from] ChartError),
}

/// Parse both logs and combine their accepted events into a single table.
///
/// Fails if either scenario has no accepted event, as the comparison would be meaningless.
pub fn load_events(
    mitigation_false_log: impl AsRef<Path>,
    mitigation_true_log: impl AsRef<Path>,
    config: &SimulationConfig,
) -> Result<EventTable, CompareError> {
    let disabled = parse_log_file(mitigation_false_log, Scenario::MitigationDisabled, config);
    let enabled = parse_log_file(mitigation_true_log, Scenario::MitigationEnabled, config);

    for (scenario, table) in [
        (Scenario::MitigationDisabled, &disabled),
        (Scenario::MitigationEnabled, &enabled),
    ] {
        if table.is_empty() {
            return Err(CompareError::NoAcceptedEvents(scenario));
        }
    }

    Ok(disabled.concat(enabled))
}

/// Parse both logs, compute the cumulative series and write the chart to `output`.
///
/// Nothing is written if either log yields no accepted event.
pub fn compare_logs(
    mitigation_false_log: impl AsRef<Path>,
    mitigation_true_log: impl AsRef<Path>,
    config: &SimulationConfig,
    output: impl AsRef<Path>,
) -> Result<Vec<CumulativeSeries>, CompareError> {
    let events = load_events(mitigation_false_log, mitigation_true_log, config)?.sorted_by_time();
    let series = cumulative_series(&events, config.horizon);

    render(&series, config.horizon, output)?;

    Ok(series)
}
