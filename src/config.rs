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
//! Fixed policy values of a comparison run.
//!
//! The horizon and the extrapolation schedule describe one particular simulation setup (two
//! legitimate receivers, an attacker replaying once per second). They are threaded explicitly
//! through the parser, the aggregator and the chart, so that alternative setups can be tested in
//! isolation.

/// File name of the chart, written to the current working directory.
pub const OUTPUT_FILENAME: &str = "rpl_dio_replay_mitigation_plot.png";

/// Configuration shared by all stages of a comparison run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Simulation end time in seconds. No event may lie beyond it.
    pub horizon: f64,
    /// Schedule used to reconstruct acceptances the unmitigated log does not show.
    pub extrapolation: ExtrapolationPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon: 10.0,
            extrapolation: ExtrapolationPolicy::default(),
        }
    }
}

impl SimulationConfig {
    /// Use a different horizon, keeping the extrapolation schedule.
    pub fn with_horizon(self, horizon: f64) -> Self {
        Self { horizon, ..self }
    }
}

/// Assumed acceptance schedule of the two legitimate receivers once the unmitigated log stops
/// reporting them.
///
/// The primary node accepts at `start`, `start + interval`, `start + 2 * interval`, ...; the
/// secondary node accepts `stagger` seconds after each of those. The values were derived from a
/// single sample log and only hold for that attack timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrapolationPolicy {
    /// Time of the first synthetic acceptance of the primary node.
    pub start: f64,
    /// Time between two replayed DIOs.
    pub interval: f64,
    /// Receive delay of the secondary node relative to the primary one.
    pub stagger: f64,
    pub primary_node: u32,
    pub secondary_node: u32,
}

impl Default for ExtrapolationPolicy {
    fn default() -> Self {
        Self {
            start: 3.0,
            interval: 1.0,
            stagger: 0.5,
            primary_node: 1,
            secondary_node: 2,
        }
    }
}
