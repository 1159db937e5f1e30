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
//! Library for visualizing the effect of the RPL DIO replay mitigation from ns-3 simulation logs.

pub mod chart;
pub mod compare;
pub mod config;
pub mod cumulative;
pub mod extrapolation;
pub mod log_parser;
pub mod records;
pub mod util;

#[cfg(test)]
mod test;

pub mod prelude {
    pub use super::{
        compare::{compare_logs, CompareError},
        config::{ExtrapolationPolicy, SimulationConfig, OUTPUT_FILENAME},
        cumulative::CumulativeSeries,
        log_parser::parse_log_file,
        records::{EventRecord, EventTable, Scenario},
    };
}
