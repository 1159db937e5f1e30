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
//! Cumulative number of accepted DIOs over time, per scenario.
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::records::{EventTable, Scenario};

/// Points of a time series, stored column-wise.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TimeSeries<T> {
    pub t: Vec<f64>,
    pub y: Vec<T>,
}

impl<T> TimeSeries<T> {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn push(&mut self, t: f64, y: T) {
        self.t.push(t);
        self.y.push(y);
    }

    pub fn last(&self) -> Option<(f64, &T)> {
        Some((*self.t.last()?, self.y.last()?))
    }
}

impl<T> FromIterator<(f64, T)> for TimeSeries<T> {
    fn from_iter<I: IntoIterator<Item = (f64, T)>>(iter: I) -> Self {
        let (t, y) = iter.into_iter().multiunzip();
        Self { t, y }
    }
}

impl<T> IntoIterator for TimeSeries<T> {
    type Item = (f64, T);

    type IntoIter = std::iter::Zip<std::vec::IntoIter<f64>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.t.into_iter().zip(self.y)
    }
}

impl<'a, T> IntoIterator for &'a TimeSeries<T> {
    type Item = (&'a f64, &'a T);

    type IntoIter = std::iter::Zip<std::slice::Iter<'a, f64>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.t.iter().zip(self.y.iter())
    }
}

/// Step function counting the accepted DIOs of one scenario.
///
/// The first point is always `(0, 0)`. Each further point holds the count after all events at that
/// time, and the value is kept until the next point. The last point lies on the horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeSeries {
    pub scenario: Scenario,
    pub series: TimeSeries<u32>,
}

impl CumulativeSeries {
    /// Build the series of `scenario` from all of its records in `table`.
    pub fn from_table(table: &EventTable, scenario: Scenario, horizon: f64) -> Self {
        let mut series = TimeSeries::default();
        series.push(0.0, 0);

        let mut count = 0;
        for (time, group) in &table
            .scenario(scenario)
            .sorted_by(|a, b| a.time.total_cmp(&b.time))
            .group_by(|r| r.time)
        {
            count += group.map(|r| r.accepted_count()).sum::<u32>();
            series.push(time, count);
        }

        // hold the last value until the end of the simulation
        let last = series.last().map(|(t, y)| (t, *y));
        if let Some((last_t, last_y)) = last {
            if last_t < horizon {
                series.push(horizon, last_y);
            }
        }

        Self { scenario, series }
    }

    /// Final number of accepted DIOs.
    pub fn total(&self) -> u32 {
        self.series.y.last().copied().unwrap_or_default()
    }

    /// Value of the step function at time `t`.
    pub fn value_at(&self, t: f64) -> u32 {
        (&self.series)
            .into_iter()
            .take_while(|(time, _)| **time <= t)
            .last()
            .map(|(_, y)| *y)
            .unwrap_or_default()
    }

    /// Corner points of the step function, with a horizontal segment up to the next time followed
    /// by a vertical jump.
    pub fn step_path(&self) -> Vec<(f64, u32)> {
        let mut path = Vec::with_capacity(2 * self.series.len());
        let mut prev: Option<u32> = None;
        for (t, y) in &self.series {
            if let Some(prev_y) = prev {
                path.push((*t, prev_y));
            }
            path.push((*t, *y));
            prev = Some(*y);
        }
        path
    }

    /// Recorded points, used as markers.
    pub fn points(&self) -> Vec<(f64, u32)> {
        (&self.series).into_iter().map(|(t, y)| (*t, *y)).collect()
    }
}

/// Compute the cumulative series of every scenario. Scenarios without records yield a flat line
/// at zero.
pub fn cumulative_series(table: &EventTable, horizon: f64) -> Vec<CumulativeSeries> {
    Scenario::iter()
        .map(|scenario| CumulativeSeries::from_table(table, scenario, horizon))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::records::{EventRecord, Scenario::*};

    fn table(events: &[(Scenario, f64, bool)]) -> EventTable {
        events
            .iter()
            .map(|(s, t, a)| EventRecord::logged(*s, *t, *a, 1))
            .collect()
    }

    #[test]
    fn seeded_and_extended() {
        let t = table(&[
            (MitigationEnabled, 1.5, true),
            (MitigationEnabled, 1.0, true),
        ]);
        let s = CumulativeSeries::from_table(&t, MitigationEnabled, 10.0);
        assert_eq!(s.series.t, vec![0.0, 1.0, 1.5, 10.0]);
        assert_eq!(s.series.y, vec![0, 1, 2, 2]);
        assert_eq!(s.total(), 2);
    }

    #[test]
    fn scenarios_are_independent() {
        let t = table(&[
            (MitigationDisabled, 1.0, true),
            (MitigationEnabled, 1.0, true),
            (MitigationDisabled, 2.0, true),
            (MitigationEnabled, 3.0, false),
        ]);
        let series = cumulative_series(&t, 10.0);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].scenario, MitigationDisabled);
        assert_eq!(series[0].series.y, vec![0, 1, 2, 2]);
        assert_eq!(series[1].scenario, MitigationEnabled);
        assert_eq!(series[1].series.t, vec![0.0, 1.0, 3.0, 10.0]);
        assert_eq!(series[1].series.y, vec![0, 1, 1, 1]);
    }

    #[test]
    fn same_time_collapses_to_one_point() {
        let t = table(&[
            (MitigationEnabled, 2.0, true),
            (MitigationEnabled, 2.0, true),
        ]);
        let s = CumulativeSeries::from_table(&t, MitigationEnabled, 10.0);
        assert_eq!(s.series.t, vec![0.0, 2.0, 10.0]);
        assert_eq!(s.series.y, vec![0, 2, 2]);
    }

    #[test]
    fn last_event_on_horizon() {
        let t = table(&[(MitigationDisabled, 10.0, true)]);
        let s = CumulativeSeries::from_table(&t, MitigationDisabled, 10.0);
        assert_eq!(s.series.t, vec![0.0, 10.0]);
        assert_eq!(s.series.y, vec![0, 1]);
    }

    #[test]
    fn empty_is_flat_zero() {
        let s = CumulativeSeries::from_table(&EventTable::new(), MitigationEnabled, 10.0);
        assert_eq!(s.series.t, vec![0.0, 10.0]);
        assert_eq!(s.series.y, vec![0, 0]);
        assert_eq!(s.total(), 0);
    }

    #[test]
    fn monotonic_and_starts_at_zero() {
        let t = table(&[
            (MitigationDisabled, 4.0, true),
            (MitigationDisabled, 0.5, false),
            (MitigationDisabled, 2.5, true),
            (MitigationDisabled, 2.5, false),
            (MitigationDisabled, 7.0, true),
        ]);
        let s = CumulativeSeries::from_table(&t, MitigationDisabled, 10.0);
        assert_eq!(s.value_at(0.0), 0);
        assert!(s.series.y.windows(2).all(|w| w[0] <= w[1]));
        assert!(s.series.t.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn value_holds_until_next_event() {
        let t = table(&[
            (MitigationEnabled, 1.0, true),
            (MitigationEnabled, 3.0, true),
        ]);
        let s = CumulativeSeries::from_table(&t, MitigationEnabled, 10.0);
        assert_eq!(s.value_at(0.5), 0);
        assert_eq!(s.value_at(1.0), 1);
        assert_eq!(s.value_at(2.9), 1);
        assert_eq!(s.value_at(3.0), 2);
        assert_eq!(s.value_at(10.0), 2);
    }

    #[test]
    fn post_steps() {
        let t = table(&[(MitigationEnabled, 1.0, true)]);
        let s = CumulativeSeries::from_table(&t, MitigationEnabled, 2.0);
        assert_eq!(
            s.step_path(),
            vec![(0.0, 0), (1.0, 0), (1.0, 1), (2.0, 1), (2.0, 1)]
        );
        assert_eq!(s.points(), vec![(0.0, 0), (1.0, 1), (2.0, 1)]);
    }
}
