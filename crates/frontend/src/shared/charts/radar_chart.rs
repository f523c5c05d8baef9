use super::scale::polar;
use super::{legend, px, tooltip, Series};
use leptos::prelude::*;
use std::f64::consts::PI;

const SIZE: f64 = 320.0;

/// Series of scores (0..=max) on a shared set of axes
#[component]
pub fn RadarChart(
    axes: Vec<String>,
    series: Vec<Series>,
    #[prop(default = 100.0)] max: f64,
) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);
    let c = SIZE / 2.0;
    let radius = c - 40.0;
    let n = axes.len().max(1);
    let angle = move |i: usize| 2.0 * PI * i as f64 / n as f64;
    let point = move |i: usize, v: f64| polar(c, c, radius * (v / max).clamp(0.0, 1.0), angle(i));

    let rings = [0.25, 0.5, 0.75, 1.0]
        .into_iter()
        .map(|f| {
            let pts = (0..n)
                .map(|i| {
                    let (x, y) = polar(c, c, radius * f, angle(i));
                    format!("{},{}", px(x), px(y))
                })
                .collect::<Vec<_>>()
                .join(" ");
            view! { <polygon points=pts fill="none" stroke="#e5e7eb" /> }
        })
        .collect_view();

    let spokes = axes
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let (x, y) = polar(c, c, radius, angle(i));
            let (lx, ly) = polar(c, c, radius + 18.0, angle(i));
            view! {
                <g>
                    <line x1=px(c) y1=px(c) x2=px(x) y2=px(y) stroke="#e5e7eb" />
                    <text x=px(lx) y=px(ly) text-anchor="middle" dominant-baseline="middle" font-size="12" fill="#374151">
                        {label.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    let shapes = series
        .iter()
        .enumerate()
        .map(|(si, s)| {
            let pts = (0..n)
                .map(|i| {
                    let (x, y) = point(i, s.value(i).unwrap_or(0.0));
                    format!("{},{}", px(x), px(y))
                })
                .collect::<Vec<_>>()
                .join(" ");
            let opacity = move || if hovered.get() == Some(si) { "0.45" } else { "0.2" };
            view! {
                <polygon
                    points=pts
                    fill=s.color.clone()
                    fill-opacity=opacity
                    stroke=s.color.clone()
                    stroke-width="2"
                    on:mouseenter=move |_| hovered.set(Some(si))
                    on:mouseleave=move |_| hovered.set(None)
                />
            }
        })
        .collect_view();

    let legend_items = series
        .iter()
        .map(|s| (s.name.clone(), s.color.clone()))
        .collect();

    let tooltip_view = move || {
        hovered.get().and_then(|i| series.get(i)).map(|s| {
            let lines = axes
                .iter()
                .enumerate()
                .map(|(i, a)| format!("{}: {:.0}", a, s.value(i).unwrap_or(0.0)))
                .collect();
            tooltip(s.name.clone(), lines)
        })
    };

    view! {
        <div class="chart chart--radar">
            <svg viewBox=format!("0 0 {} {}", px(SIZE), px(SIZE)) width="100%" role="img">
                {rings}
                {spokes}
                {shapes}
            </svg>
            {legend(legend_items)}
            {tooltip_view}
        </div>
    }
}
