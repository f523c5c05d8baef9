use crate::shared::charts::{HBar, HBarChart};
use crate::shared::components::{CardAnimated, EmptyState};
use contracts::dashboards::d601_analytics::{leaderboard_height, LeaderboardEntry};
use contracts::shared::number_format::format_ratio;
use leptos::prelude::*;

fn rate_axis(value: f64) -> String {
    format_ratio(value, 0)
}

fn rate_tooltip(value: f64) -> String {
    format_ratio(value, 1)
}

#[component]
pub fn LeaderboardTab(entries: Vec<LeaderboardEntry>) -> impl IntoView {
    if entries.is_empty() {
        return view! { <EmptyState message="No leaderboard data available" /> }.into_any();
    }

    let height = leaderboard_height(entries.len());
    let rows: Vec<HBar> = entries
        .iter()
        .map(|e| {
            HBar::new(e.name.clone(), e.achievement_rate, e.status.color())
                .with_details(vec![e.gap_label(), e.achievement_label()])
        })
        .collect();

    view! {
        <CardAnimated title="Salesman Leaderboard" subtitle="Achievement rate vs target (100%)">
            <HBarChart
                rows=rows
                height=height
                x_format=rate_axis
                tooltip_format=rate_tooltip
                marker=100.0
            />
        </CardAnimated>
    }
    .into_any()
}
