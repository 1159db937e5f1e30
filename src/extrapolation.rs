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
//! Reconstruction of the acceptances that the unmitigated log does not report.
//!
//! Without mitigation, both legitimate receivers keep accepting the replayed DIOs until the end of
//! the simulation, but the captured log only covers the first few seconds. The missing tail is
//! filled in according to an [`ExtrapolationPolicy`].

use crate::{
    config::ExtrapolationPolicy,
    records::{EventRecord, EventTable, Scenario},
};

/// Synthesize the acceptances of the primary and secondary node after `last_logged_time`.
///
/// Only events strictly after `last_logged_time` and strictly before `horizon` are generated. The
/// result is ordered by time as long as the stagger is smaller than the interval.
pub fn extrapolate(
    scenario: Scenario,
    last_logged_time: f64,
    policy: &ExtrapolationPolicy,
    horizon: f64,
) -> EventTable {
    let mut table = EventTable::new();

    if !(policy.interval > 0.0) {
        log::warn!(
            "Extrapolation interval must be positive, got {}. Skipping extrapolation.",
            policy.interval
        );
        return table;
    }

    let keep = |t: f64| t > last_logged_time && t < horizon;

    // compute each step from its index to avoid accumulating rounding errors
    let mut step = 0u32;
    loop {
        let t = policy.start + f64::from(step) * policy.interval;
        if t >= horizon {
            break;
        }
        if keep(t) {
            table.push(EventRecord::extrapolated(scenario, t, policy.primary_node));
        }
        let t_secondary = t + policy.stagger;
        if keep(t_secondary) {
            table.push(EventRecord::extrapolated(
                scenario,
                t_secondary,
                policy.secondary_node,
            ));
        }
        step += 1;
    }

    log::debug!(
        "Extrapolated {} acceptances for scenario {scenario} after t={last_logged_time}",
        table.len()
    );

    table
}
