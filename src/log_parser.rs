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
//! Extraction of DIO acceptance and drop events from ns-3 simulation logs.
//!
//! A recognized line looks like this:
//!
//! ```text
//! +2.000000000s 1 RplDioReplaySim:ReceiveFakeDio(): [INFO ] Node 1 DROPPED replayed DIO seq=1 at 2
//! ```
//!
//! The leading `+<seconds>s` is the elapsed simulation time of the logger, the trailing `at
//! <seconds>` (or `at t=<seconds>`) is the event time reported by the node. Only the latter is used
//! as the time of the record. All other lines are ignored.
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    config::SimulationConfig,
    extrapolation::extrapolate,
    records::{last_time, EventRecord, EventTable, LogRecord, Scenario},
};

#[derive(Debug, thiserror::Error)]
pub enum LogParserError {
    #[error("Cannot read log file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a node did with a received DIO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum_macros::EnumString)]
pub enum DioAction {
    #[strum(serialize = "accepted")]
    Accepted,
    #[strum(serialize = "DROPPED")]
    Dropped,
}

/// A single matched log line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoggedDio {
    /// Elapsed simulation time of the logger (`+<seconds>s`).
    pub sim_time: f64,
    pub node: u32,
    pub action: DioAction,
    /// DIO sequence number, if the line contains one.
    pub seq: Option<u32>,
    /// Event time reported by the node (`at <seconds>`).
    pub time: f64,
}

impl LoggedDio {
    pub fn accepted(&self) -> bool {
        self.action == DioAction::Accepted
    }

    pub fn into_record(self, scenario: Scenario) -> EventRecord {
        EventRecord::logged(scenario, self.time, self.accepted(), self.node)
    }
}

impl LogRecord for LoggedDio {
    fn time(&self) -> f64 {
        self.time
    }
}

lazy_static! {
    static ref DIO_RE: Regex = Regex::new(
        r"\+(?P<sim_time>\d+\.\d+)s.*Node (?P<node>\d+) (?P<action>accepted|DROPPED).* at (?:t=)?(?P<time>\d+\.?\d*)"
    )
    .unwrap();
    static ref SEQ_RE: Regex = Regex::new(r"seq=(?P<seq>\d+)").unwrap();
}

/// Parse a single log line. Returns `None` if the line does not describe a DIO event.
pub fn parse_line(line: &str) -> Option<LoggedDio> {
    let m = DIO_RE.captures(line)?;
    let sim_time = f64::from_str(m.name("sim_time")?.as_str()).ok()?;
    let node = u32::from_str(m.name("node")?.as_str()).ok()?;
    let action = DioAction::from_str(m.name("action")?.as_str()).ok()?;
    let time = f64::from_str(m.name("time")?.as_str()).ok()?;
    let seq = SEQ_RE
        .captures(line)
        .and_then(|s| u32::from_str(s.name("seq")?.as_str()).ok());

    Some(LoggedDio {
        sim_time,
        node,
        action,
        seq,
        time,
    })
}

/// Read the entire content of a log file.
pub fn read_log(path: impl AsRef<Path>) -> Result<String, LogParserError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| LogParserError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a log file of the given scenario.
///
/// An unreadable file is not fatal: the error is logged and an empty table is returned. The
/// caller decides whether it can continue without data.
pub fn parse_log_file(
    path: impl AsRef<Path>,
    scenario: Scenario,
    config: &SimulationConfig,
) -> EventTable {
    let path = path.as_ref();
    match read_log(path) {
        Ok(content) => {
            log::debug!("Loading: {path:?}");
            parse_log(&content, scenario, config)
        }
        Err(e) => {
            log::error!("{e}");
            EventTable::new()
        }
    }
}

/// Parse the content of a log and return all accepted events of `scenario`, logging a one-line
/// [`ScenarioSummary`].
pub fn parse_log(content: &str, scenario: Scenario, config: &SimulationConfig) -> EventTable {
    let (events, summary) = parse_log_with_summary(content, scenario, config);
    log::info!("{summary}");
    events
}

/// Parse the content of a log and return all accepted events of `scenario` together with a
/// summary of what the log contained.
///
/// For the scenario without mitigation, the log is extended by the extrapolated acceptances after
/// the last logged event. Records sharing the same time are collapsed into one, preferring the
/// logged record over the extrapolated one. Events after the horizon are not returned, but they
/// still mark how long the log was captured.
pub fn parse_log_with_summary(
    content: &str,
    scenario: Scenario,
    config: &SimulationConfig,
) -> (EventTable, ScenarioSummary) {
    let lines = content.lines().filter_map(parse_line).collect_vec();

    // dropped events also tell us until when the log was captured
    let last_logged_time = last_time(&lines);

    let (logged, clipped): (Vec<&LoggedDio>, Vec<&LoggedDio>) =
        lines.iter().partition(|l| l.time <= config.horizon);

    if !clipped.is_empty() {
        log::debug!(
            "[{scenario}] Ignoring {} events after the horizon of {}s",
            clipped.len(),
            config.horizon
        );
    }

    let explicit: EventTable = logged
        .iter()
        .map(|l| l.into_record(scenario))
        .collect();

    let events = if scenario.needs_extrapolation() {
        let synthetic = extrapolate(
            scenario,
            last_logged_time.unwrap_or(0.0),
            &config.extrapolation,
            config.horizon,
        );
        explicit.accepted().concat(synthetic).dedup_by_time()
    } else {
        explicit.accepted()
    };

    let accepted = logged.iter().filter(|l| l.accepted()).count();
    let summary = ScenarioSummary {
        scenario,
        total: events.len(),
        accepted,
        dropped: logged.len() - accepted,
        clipped: clipped.len(),
        extrapolated: events.iter().filter(|r| !r.origin.is_logged()).count(),
        nodes: events
            .iter()
            .map(|r| r.origin.node())
            .chain(logged.iter().map(|l| l.node))
            .unique()
            .sorted()
            .collect(),
        seq_range: lines.iter().filter_map(|l| l.seq).minmax().into_option(),
        last_logged_time,
        last_sim_time: lines.iter().map(|l| l.sim_time).max_by(f64::total_cmp),
    };

    (events, summary)
}

/// Overview of a parsed log, reported once per scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummary {
    pub scenario: Scenario,
    /// Number of returned acceptances, logged and extrapolated.
    pub total: usize,
    /// Accepted DIOs explicitly logged within the horizon.
    pub accepted: usize,
    /// Dropped DIOs explicitly logged within the horizon.
    pub dropped: usize,
    /// Logged events after the horizon.
    pub clipped: usize,
    /// Returned acceptances that were reconstructed.
    pub extrapolated: usize,
    /// Nodes that logged an event or were assigned an extrapolated acceptance.
    pub nodes: Vec<u32>,
    /// Smallest and largest DIO sequence number seen in the log.
    pub seq_range: Option<(u32, u32)>,
    /// Latest event time of any logged line, including those after the horizon.
    pub last_logged_time: Option<f64>,
    /// Latest elapsed simulation time of any logged line.
    pub last_sim_time: Option<f64>,
}

impl fmt::Display for ScenarioSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} accepted DIOs ({} logged, {} extrapolated), {} dropped, {} after the horizon",
            self.scenario,
            self.total,
            self.total - self.extrapolated,
            self.extrapolated,
            self.dropped,
            self.clipped,
        )?;
        write!(f, "; nodes [{}]", self.nodes.iter().join(", "))?;
        if let Some((first, last)) = self.seq_range {
            write!(f, ", seq {first}..={last}")?;
        }
        match (self.last_logged_time, self.last_sim_time) {
            (Some(t), Some(sim)) => write!(f, ", last logged event at {t}s (+{sim}s)"),
            _ => write!(f, ", no logged events"),
        }
    }
}
