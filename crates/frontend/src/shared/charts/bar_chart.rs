use super::scale::{extent, nice_ticks, LinearScale};
use super::{legend, px, tooltip, y_grid, Plot, Series, VIEW_WIDTH};
use leptos::prelude::*;

/// Vertical bars per category, grouped or stacked, with an optional dashed line.
#[component]
pub fn BarChart(
    categories: Vec<String>,
    series: Vec<Series>,
    /// Drawn as a dashed line over the bars (forecast)
    #[prop(optional_no_strip)]
    line: Option<Series>,
    #[prop(optional)] stacked: bool,
    /// Per-category colours overriding the series colour (single series only)
    #[prop(optional)]
    bar_colors: Option<Vec<String>>,
    #[prop(default = 300)] height: u32,
    /// Axis tick labels
    y_format: fn(f64) -> String,
    /// Tooltip values; defaults to `y_format`
    #[prop(optional)]
    tooltip_format: Option<fn(f64) -> String>,
) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);
    let tooltip_format = tooltip_format.unwrap_or(y_format);

    let h = height as f64;
    let plot = Plot::new(h, 72.0);
    let n = categories.len();

    let mut values: Vec<f64> = if stacked {
        (0..n)
            .map(|i| series.iter().filter_map(|s| s.value(i)).sum())
            .collect()
    } else {
        series.iter().flat_map(|s| s.values.iter().flatten().copied()).collect()
    };
    if let Some(l) = &line {
        values.extend(l.values.iter().flatten().copied());
    }
    let (lo, hi) = extent(values);
    let ticks = nice_ticks(lo, hi, 5);
    let y = LinearScale::new(
        (ticks[0], ticks[ticks.len() - 1]),
        (plot.bottom, plot.top),
    );
    let zero = y.map(0.0);

    let band = plot.width() / n.max(1) as f64;
    let groups = if stacked { 1 } else { series.len().max(1) };
    let bar_w = (band * 0.7 / groups as f64).min(48.0);
    let group_w = bar_w * groups as f64;

    let mut bars = Vec::new();
    for i in 0..n {
        let x0 = plot.left + band * i as f64 + (band - group_w) / 2.0;
        let mut stack_base = 0.0;
        for (si, s) in series.iter().enumerate() {
            let Some(v) = s.value(i) else { continue };
            let (top, bottom) = if stacked {
                let from = stack_base;
                stack_base += v;
                (y.map(stack_base), y.map(from))
            } else {
                (y.map(v.max(0.0)), y.map(v.min(0.0)))
            };
            let x = if stacked { x0 } else { x0 + bar_w * si as f64 };
            let fill = bar_colors
                .as_ref()
                .and_then(|c| c.get(i).cloned())
                .unwrap_or_else(|| s.color.clone());
            bars.push(view! {
                <rect
                    x=px(x)
                    y=px(top)
                    width=px(bar_w)
                    height=px((bottom - top).max(0.0))
                    fill=fill
                    rx="3"
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                />
            });
        }
    }

    let line_view = line.as_ref().map(|l| {
        let mut d = String::new();
        let mut pen_down = false;
        for i in 0..n {
            match l.value(i) {
                Some(v) => {
                    let cx = plot.left + band * (i as f64 + 0.5);
                    d.push_str(&format!("{}{},{} ", if pen_down { "L" } else { "M" }, px(cx), px(y.map(v))));
                    pen_down = true;
                }
                None => pen_down = false,
            }
        }
        view! {
            <path d=d fill="none" stroke=l.color.clone() stroke-width="2.5" stroke-dasharray="6 4" />
        }
    });

    let labels = categories
        .iter()
        .enumerate()
        .map(|(i, c)| {
            view! {
                <text x=px(plot.left + band * (i as f64 + 0.5)) y=px(plot.bottom + 18.0) text-anchor="middle" font-size="11" fill="#6b7280">
                    {c.clone()}
                </text>
            }
        })
        .collect_view();

    let mut legend_items: Vec<(String, String)> =
        series.iter().map(|s| (s.name.clone(), s.color.clone())).collect();
    if let Some(l) = &line {
        legend_items.push((l.name.clone(), l.color.clone()));
    }
    let show_legend = legend_items.len() > 1;

    let mut all_series = series.clone();
    all_series.extend(line.clone());
    let tooltip_view = move || {
        hovered.get().map(|i| {
            let lines = all_series
                .iter()
                .filter_map(|s| s.value(i).map(|v| format!("{}: {}", s.name, tooltip_format(v))))
                .collect();
            tooltip(categories.get(i).cloned().unwrap_or_default(), lines)
        })
    };

    view! {
        <div class="chart chart--bar">
            <svg viewBox=format!("0 0 {} {}", VIEW_WIDTH, height) width="100%" role="img">
                {y_grid(&ticks, y, plot, y_format)}
                <line x1=px(plot.left) x2=px(plot.right) y1=px(zero) y2=px(zero) stroke="#9ca3af" />
                {bars}
                {line_view}
                {labels}
            </svg>
            {show_legend.then(|| legend(legend_items))}
            {tooltip_view}
        </div>
    }
}
