use super::scale::{extent, nice_ticks, LinearScale};
use super::{px, tooltip, x_grid, y_grid, Plot, VIEW_WIDTH};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub label: String,
    pub details: Vec<String>,
}

/// Points on two value axes with optional dashed reference lines.
#[component]
pub fn ScatterChart(
    points: Vec<ScatterPoint>,
    /// Reference values drawn as dashed lines: (x, y)
    #[prop(optional)]
    reference: Option<(f64, f64)>,
    #[prop(default = 420)] height: u32,
    x_format: fn(f64) -> String,
    y_format: fn(f64) -> String,
    #[prop(optional)] x_label: &'static str,
    #[prop(optional)] y_label: &'static str,
) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);

    let plot = Plot::new(height as f64, 72.0);
    let (x_lo, x_hi) = extent(points.iter().map(|p| p.x));
    let (y_lo, y_hi) = extent(points.iter().map(|p| p.y));
    let x_ticks = nice_ticks(x_lo, x_hi, 6);
    let y_ticks = nice_ticks(y_lo, y_hi, 5);
    let xs = LinearScale::new(
        (x_ticks[0], x_ticks[x_ticks.len() - 1]),
        (plot.left, plot.right),
    );
    let ys = LinearScale::new(
        (y_ticks[0], y_ticks[y_ticks.len() - 1]),
        (plot.bottom, plot.top),
    );

    let dots = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let r = move || if hovered.get() == Some(i) { "9" } else { "6" };
            view! {
                <circle
                    cx=px(xs.map(p.x))
                    cy=px(ys.map(p.y))
                    r=r
                    fill=p.color.clone()
                    fill-opacity="0.75"
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                />
            }
        })
        .collect_view();

    let reference_view = reference.map(|(rx, ry)| {
        let vx = px(xs.map(rx));
        let hy = px(ys.map(ry));
        view! {
            <g class="chart__reference">
                <line x1=vx.clone() x2=vx y1=px(plot.top) y2=px(plot.bottom) stroke="#6b7280" stroke-dasharray="6 4" />
                <line x1=px(plot.left) x2=px(plot.right) y1=hy.clone() y2=hy stroke="#6b7280" stroke-dasharray="6 4" />
            </g>
        }
    });

    let tooltip_view = move || {
        hovered
            .get()
            .and_then(|i| points.get(i))
            .map(|p| tooltip(p.label.clone(), p.details.clone()))
    };

    view! {
        <div class="chart chart--scatter">
            <svg viewBox=format!("0 0 {} {}", VIEW_WIDTH, height) width="100%" role="img">
                {y_grid(&y_ticks, ys, plot, y_format)}
                {x_grid(&x_ticks, xs, plot, x_format)}
                {reference_view}
                {dots}
                <text x=px(plot.right) y=px(plot.bottom - 6.0) text-anchor="end" font-size="11" fill="#374151">{x_label}</text>
                <text x=px(plot.left + 6.0) y=px(plot.top + 10.0) font-size="11" fill="#374151">{y_label}</text>
            </svg>
            {tooltip_view}
        </div>
    }
}
