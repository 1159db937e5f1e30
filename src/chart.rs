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
//! Rendering of the cumulative series as a step chart.
use std::path::Path;

use plotters::{prelude::*, style::FontStyle};

use crate::{cumulative::CumulativeSeries, records::Scenario};

const TITLE: &str = "Impact of RPL DIO Replay Mitigation on Node Acceptance";
const X_DESC: &str = "Simulation Time (seconds)";
const Y_DESC: &str = "Cumulative Accepted DIO Messages";
const SIZE: (u32, u32) = (1000, 600);

/// Stride between two ticks on the y axis.
pub const Y_TICK_STRIDE: u32 = 2;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("Drawing Error: {0}")]
    Drawing(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        Self::Drawing(e.to_string())
    }
}

/// Visual appearance of one scenario.
#[derive(Debug, Clone, Copy)]
pub struct SeriesStyle {
    pub color: RGBColor,
    pub line_width: u32,
    pub marker_size: u32,
}

pub fn style(scenario: Scenario) -> SeriesStyle {
    match scenario {
        Scenario::MitigationDisabled => SeriesStyle {
            color: RGBColor(0xe3, 0x4a, 0x33),
            line_width: 3,
            marker_size: 6,
        },
        Scenario::MitigationEnabled => SeriesStyle {
            color: RGBColor(0x33, 0xa0, 0x2c),
            line_width: 3,
            marker_size: 6,
        },
    }
}

/// Upper end of the y axis: the smallest multiple of the tick stride that leaves some headroom
/// above the largest count.
pub fn y_axis_top(series: &[CumulativeSeries]) -> u32 {
    let max = series.iter().map(|s| s.total()).max().unwrap_or_default();
    let top = max + Y_TICK_STRIDE;
    top.div_ceil(Y_TICK_STRIDE) * Y_TICK_STRIDE
}

/// Tick positions on the y axis, every [`Y_TICK_STRIDE`] from zero up to `top`.
pub fn y_key_points(top: u32) -> Vec<u32> {
    (0..=top).step_by(Y_TICK_STRIDE as usize).collect()
}

/// Number of x labels such that there is one per full second.
pub fn x_label_count(horizon: f64) -> usize {
    horizon.ceil().max(0.0) as usize + 1
}

/// Draw all series into a PNG file at `output`.
pub fn render(
    series: &[CumulativeSeries],
    horizon: f64,
    output: impl AsRef<Path>,
) -> Result<(), ChartError> {
    let output = output.as_ref();
    let y_top = y_axis_top(series);

    let root = BitMapBackend::new(output, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            TITLE,
            ("sans-serif", 28).into_font().style(FontStyle::Bold),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(
            0f64..horizon,
            (0u32..y_top).with_key_points(y_key_points(y_top)),
        )?;

    chart
        .configure_mesh()
        .x_labels(x_label_count(horizon))
        .y_labels(y_key_points(y_top).len())
        .x_label_formatter(&|x: &f64| format!("{x:.0}"))
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .axis_desc_style(("sans-serif", 18))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(TRANSPARENT)
        .draw()?;

    for s in series {
        let SeriesStyle {
            color,
            line_width,
            marker_size,
        } = style(s.scenario);

        chart
            .draw_series(LineSeries::new(s.step_path(), color.stroke_width(line_width)))?
            .label(s.scenario.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
            });

        chart.draw_series(
            s.points()
                .into_iter()
                .map(|p| Circle::new(p, marker_size, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", 16))
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    log::info!("Visualization saved to {}", output.display());

    Ok(())
}
