use super::scale::{extent, nice_ticks, LinearScale};
use super::{px, tooltip, x_grid, Plot, VIEW_WIDTH};
use leptos::prelude::*;

/// One horizontal bar
#[derive(Debug, Clone, PartialEq)]
pub struct HBar {
    pub label: String,
    pub value: f64,
    pub color: String,
    /// Extra tooltip lines after the value
    pub details: Vec<String>,
}

impl HBar {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
            details: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }
}

/// Horizontal bars, one row per item, labels on the left.
#[component]
pub fn HBarChart(
    rows: Vec<HBar>,
    /// Total height in px; defaults to 36 px per row
    #[prop(optional)]
    height: Option<u32>,
    /// Axis tick labels
    x_format: fn(f64) -> String,
    #[prop(optional)] tooltip_format: Option<fn(f64) -> String>,
    /// Dashed vertical marker, e.g. 100 for a target line
    #[prop(optional)]
    marker: Option<f64>,
) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);
    let tooltip_format = tooltip_format.unwrap_or(x_format);

    let height = height.unwrap_or((rows.len() as u32) * 36 + 48);
    let plot = Plot::new(height as f64, 170.0);
    let (lo, hi) = extent(rows.iter().map(|r| r.value).chain(marker));
    let ticks = nice_ticks(lo, hi, 5);
    let x = LinearScale::new((ticks[0], ticks[ticks.len() - 1]), (plot.left, plot.right));
    let zero = x.map(0.0);

    let band = (plot.bottom - plot.top) / rows.len().max(1) as f64;
    let bar_h = (band * 0.65).min(28.0);

    let bars = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let y = plot.top + band * i as f64 + (band - bar_h) / 2.0;
            let end = x.map(r.value);
            let (left, right) = if end >= zero { (zero, end) } else { (end, zero) };
            view! {
                <g
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                >
                    <text x=px(plot.left - 8.0) y=px(y + bar_h / 2.0) text-anchor="end" dominant-baseline="middle" font-size="12" fill="#374151">
                        {r.label.clone()}
                    </text>
                    <rect x=px(left) y=px(y) width=px(right - left) height=px(bar_h) fill=r.color.clone() rx="3" />
                </g>
            }
        })
        .collect_view();

    let marker_view = marker.map(|m| {
        let mx = px(x.map(m));
        view! {
            <line x1=mx.clone() x2=mx y1=px(plot.top) y2=px(plot.bottom) stroke="#6b7280" stroke-dasharray="4 4" />
        }
    });

    let tooltip_view = move || {
        hovered.get().and_then(|i| rows.get(i)).map(|r| {
            let mut lines = vec![tooltip_format(r.value)];
            lines.extend(r.details.iter().cloned());
            tooltip(r.label.clone(), lines)
        })
    };

    view! {
        <div class="chart chart--hbar">
            <svg viewBox=format!("0 0 {} {}", VIEW_WIDTH, height) width="100%" role="img">
                {x_grid(&ticks, x, plot, x_format)}
                {bars}
                {marker_view}
            </svg>
            {tooltip_view}
        </div>
    }
}
