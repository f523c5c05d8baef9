use super::scale::{arc_path, slice_angles};
use super::{px, tooltip};
use contracts::shared::number_format::format_ratio;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

const SIZE: f64 = 260.0;

/// Share of a whole as a ring; the legend lists each slice with its percentage.
#[component]
pub fn DonutChart(slices: Vec<Slice>, value_format: fn(f64) -> String) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);
    let c = SIZE / 2.0;
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    let angles = slice_angles(&slices.iter().map(|s| s.value).collect::<Vec<_>>());

    let arcs = slices
        .iter()
        .zip(angles)
        .enumerate()
        .filter(|(_, (_, (a, b)))| b > a)
        .map(|(i, (s, (a, b)))| {
            let opacity = move || match hovered.get() {
                Some(h) if h != i => "0.55",
                _ => "1",
            };
            view! {
                <path
                    d=arc_path(c, c, c - 4.0, c * 0.6, a, b)
                    fill=s.color.clone()
                    fill-opacity=opacity
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                />
            }
        })
        .collect_view();

    let share = move |v: f64| {
        if total > 0.0 {
            format_ratio(v / total * 100.0, 1)
        } else {
            format_ratio(0.0, 1)
        }
    };

    let legend_rows = slices
        .iter()
        .map(|s| {
            view! {
                <li class="chart__legend-item">
                    <span class="chart__swatch" style=format!("background: {};", s.color)></span>
                    <span class="chart__legend-label">{s.label.clone()}</span>
                    <span class="chart__legend-value">{share(s.value)}</span>
                </li>
            }
        })
        .collect_view();

    let tooltip_view = move || {
        hovered.get().and_then(|i| slices.get(i)).map(|s| {
            tooltip(
                s.label.clone(),
                vec![value_format(s.value), share(s.value)],
            )
        })
    };

    view! {
        <div class="chart chart--donut">
            <svg viewBox=format!("0 0 {} {}", px(SIZE), px(SIZE)) width="260" height="260" role="img">
                {arcs}
            </svg>
            <ul class="chart__legend chart__legend--list">{legend_rows}</ul>
            {tooltip_view}
        </div>
    }
}
