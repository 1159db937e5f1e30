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
//! Module defining the event records extracted from the simulation logs.
use std::ops::Index;

use itertools::Itertools;
use ordered_float::OrderedFloat;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum_macros::EnumString,
)]
/// The two simulation runs that are compared against each other.
pub enum Scenario {
    /// Replay mitigation disabled, the attack succeeds.
    #[strum(serialize = "false")]
    MitigationDisabled,
    /// Replay mitigation enabled, replayed DIOs are dropped.
    #[strum(serialize = "true")]
    MitigationEnabled,
}

impl Scenario {
    /// Legend entry used in the chart.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::MitigationDisabled => "No Mitigation (Attack Successful)",
            Scenario::MitigationEnabled => "With Mitigation (Attack Blocked)",
        }
    }

    /// Whether the log of this scenario is known to stop reporting acceptances early.
    pub fn needs_extrapolation(&self) -> bool {
        matches!(self, Scenario::MitigationDisabled)
    }
}

/// Where a record comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Parsed from a line of the log file.
    Logged { node: u32 },
    /// Reconstructed from the assumed attack schedule.
    Extrapolated { node: u32 },
}

impl Origin {
    pub fn node(&self) -> u32 {
        match self {
            Origin::Logged { node } | Origin::Extrapolated { node } => *node,
        }
    }

    pub fn is_logged(&self) -> bool {
        matches!(self, Origin::Logged { .. })
    }
}

/// Anything with a position on the simulation time axis.
pub trait LogRecord {
    /// Event time in seconds since the start of the simulation.
    fn time(&self) -> f64;
}

/// Largest time among `records`, if any.
pub fn last_time<'a, R: LogRecord + 'a>(
    records: impl IntoIterator<Item = &'a R>,
) -> Option<f64> {
    records.into_iter().map(|r| r.time()).max_by(f64::total_cmp)
}

/// A single DIO acceptance (or drop) of one scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRecord {
    pub scenario: Scenario,
    /// Event time in seconds, as reported at the end of the log line.
    pub time: f64,
    pub accepted: bool,
    pub origin: Origin,
}

impl EventRecord {
    pub fn logged(scenario: Scenario, time: f64, accepted: bool, node: u32) -> Self {
        Self {
            scenario,
            time,
            accepted,
            origin: Origin::Logged { node },
        }
    }

    pub fn extrapolated(scenario: Scenario, time: f64, node: u32) -> Self {
        Self {
            scenario,
            time,
            accepted: true,
            origin: Origin::Extrapolated { node },
        }
    }

    /// Contribution of this record to the cumulative count.
    pub fn accepted_count(&self) -> u32 {
        u32::from(self.accepted)
    }
}

impl LogRecord for EventRecord {
    fn time(&self) -> f64 {
        self.time
    }
}

/// Ordered collection of event records of one or both scenarios.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTable {
    records: Vec<EventRecord>,
}

impl EventTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: EventRecord) {
        self.records.push(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.records.iter()
    }

    /// Append all records of `other`.
    pub fn concat(mut self, other: EventTable) -> Self {
        self.records.extend(other.records);
        self
    }

    /// Stable sort by event time. Records at the same time keep their relative order.
    pub fn sorted_by_time(self) -> Self {
        self.records
            .into_iter()
            .sorted_by(|a, b| a.time.total_cmp(&b.time))
            .collect()
    }

    /// Only keep accepted records.
    pub fn accepted(self) -> Self {
        self.records.into_iter().filter(|r| r.accepted).collect()
    }

    /// Collapse records sharing the same `(scenario, time)` pair. The first occurrence wins, so
    /// records inserted earlier take precedence over later ones.
    pub fn dedup_by_time(self) -> Self {
        self.records
            .into_iter()
            .unique_by(|r| (r.scenario, OrderedFloat(r.time)))
            .collect()
    }

    /// Records of a single scenario, in table order.
    pub fn scenario(&self, scenario: Scenario) -> impl Iterator<Item = &EventRecord> + '_ {
        self.records.iter().filter(move |r| r.scenario == scenario)
    }

    /// Largest event time in the table, if any.
    pub fn max_time(&self) -> Option<f64> {
        last_time(&self.records)
    }

    /// Number of accepted records.
    pub fn num_accepted(&self) -> usize {
        self.records.iter().filter(|r| r.accepted).count()
    }
}

impl FromIterator<EventRecord> for EventTable {
    fn from_iter<I: IntoIterator<Item = EventRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<EventRecord> for EventTable {
    fn extend<I: IntoIterator<Item = EventRecord>>(&mut self, iter: I) {
        self.records.extend(iter)
    }
}

impl IntoIterator for EventTable {
    type Item = EventRecord;

    type IntoIter = std::vec::IntoIter<EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a EventTable {
    type Item = &'a EventRecord;

    type IntoIter = std::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Index<usize> for EventTable {
    type Output = EventRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}
