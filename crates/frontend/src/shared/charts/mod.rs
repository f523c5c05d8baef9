//! Inline SVG charts.
//!
//! Every chart takes plain owned data; callers re-render it when their
//! signal changes. Hovering a mark fills the tooltip line under the chart.

pub mod bar_chart;
pub mod donut_chart;
pub mod hbar_chart;
pub mod radar_chart;
pub mod scale;
pub mod scatter_chart;

pub use bar_chart::BarChart;
pub use donut_chart::{DonutChart, Slice};
pub use hbar_chart::{HBar, HBarChart};
pub use radar_chart::RadarChart;
pub use scatter_chart::{ScatterChart, ScatterPoint};

use contracts::shared::number_format::format_billions;
use leptos::prelude::*;
use scale::LinearScale;

/// Width of every chart's viewBox; the SVG scales to its container
pub const VIEW_WIDTH: f64 = 800.0;

/// One named, coloured value per category
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: String,
    pub values: Vec<Option<f64>>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            values,
        }
    }

    /// Series without gaps
    pub fn dense(name: impl Into<String>, color: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(name, color, values.into_iter().map(Some).collect())
    }

    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }
}

/// Drawing area inside the viewBox
#[derive(Debug, Clone, Copy)]
pub(crate) struct Plot {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Plot {
    pub fn new(height: f64, left_margin: f64) -> Self {
        Self {
            left: left_margin,
            top: 16.0,
            right: VIEW_WIDTH - 16.0,
            bottom: height - 32.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Axis label for VND amounts in billions, one decimal
pub fn billions_axis(value: f64) -> String {
    format_billions(value, 1)
}

pub(crate) fn px(v: f64) -> String {
    format!("{:.1}", v)
}

/// Horizontal grid lines with value labels on the left
pub(crate) fn y_grid(
    ticks: &[f64],
    scale: LinearScale,
    plot: Plot,
    format: fn(f64) -> String,
) -> impl IntoView {
    ticks
        .iter()
        .map(|t| {
            let y = px(scale.map(*t));
            view! {
                <g class="chart__grid">
                    <line x1=px(plot.left) x2=px(plot.right) y1=y.clone() y2=y.clone() stroke="#e5e7eb" stroke-dasharray="3 3" />
                    <text x=px(plot.left - 8.0) y=y text-anchor="end" dominant-baseline="middle" font-size="11" fill="#6b7280">
                        {format(*t)}
                    </text>
                </g>
            }
        })
        .collect_view()
}

/// Vertical grid lines with value labels underneath
pub(crate) fn x_grid(
    ticks: &[f64],
    scale: LinearScale,
    plot: Plot,
    format: fn(f64) -> String,
) -> impl IntoView {
    ticks
        .iter()
        .map(|t| {
            let x = px(scale.map(*t));
            view! {
                <g class="chart__grid">
                    <line x1=x.clone() x2=x.clone() y1=px(plot.top) y2=px(plot.bottom) stroke="#e5e7eb" stroke-dasharray="3 3" />
                    <text x=x y=px(plot.bottom + 18.0) text-anchor="middle" font-size="11" fill="#6b7280">
                        {format(*t)}
                    </text>
                </g>
            }
        })
        .collect_view()
}

/// Colour swatches with names
pub(crate) fn legend(items: Vec<(String, String)>) -> impl IntoView {
    view! {
        <div class="chart__legend">
            {items
                .into_iter()
                .map(|(name, color)| view! {
                    <span class="chart__legend-item">
                        <span class="chart__swatch" style=format!("background: {};", color)></span>
                        {name}
                    </span>
                })
                .collect_view()}
        </div>
    }
}

/// Tooltip block: a heading and detail lines
pub(crate) fn tooltip(title: String, lines: Vec<String>) -> impl IntoView {
    view! {
        <div class="chart__tooltip">
            <strong>{title}</strong>
            {lines.into_iter().map(|l| view! { <div>{l}</div> }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billions_axis_distinguishes_sub_billion_ticks() {
        let ticks = [0.0, 200_000_000.0, 400_000_000.0, 1_000_000_000.0];
        let labels: Vec<String> = ticks.iter().map(|t| billions_axis(*t)).collect();
        assert_eq!(labels, vec!["0.0B", "0.2B", "0.4B", "1.0B"]);
    }

    #[test]
    fn test_series_value_skips_gaps() {
        let s = Series::new("Forecast", "#8b5cf6", vec![None, Some(3.0)]);
        assert_eq!(s.value(0), None);
        assert_eq!(s.value(1), Some(3.0));
        assert_eq!(s.value(5), None);
    }
}
