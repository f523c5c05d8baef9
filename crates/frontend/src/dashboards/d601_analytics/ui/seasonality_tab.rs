use crate::shared::charts::{billions_axis, BarChart, Series};
use crate::shared::components::{CardAnimated, EmptyState};
use contracts::dashboards::d601_analytics::{month_name, SeasonalityPoint};
use contracts::shared::number_format::format_billions;
use leptos::prelude::*;

const REVENUE_COLOR: &str = "#3b82f6";

fn billions_vnd(value: f64) -> String {
    format!("{} VND", format_billions(value, 2))
}

#[component]
pub fn SeasonalityTab(points: Vec<SeasonalityPoint>) -> impl IntoView {
    if points.is_empty() {
        return view! { <EmptyState message="No seasonality data available" /> }.into_any();
    }

    let categories = points.iter().map(|p| month_name(p.month).to_string()).collect();
    let revenue = Series::dense(
        "Revenue",
        REVENUE_COLOR,
        points.iter().map(|p| p.revenue).collect(),
    );

    view! {
        <CardAnimated title="Seasonality" subtitle="Monthly revenue">
            <BarChart
                categories=categories
                series=vec![revenue]
                y_format=billions_axis
                tooltip_format=billions_vnd
            />
        </CardAnimated>
    }
    .into_any()
}
