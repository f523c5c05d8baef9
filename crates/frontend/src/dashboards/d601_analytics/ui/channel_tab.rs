use crate::shared::charts::{billions_axis, BarChart, RadarChart, Series};
use crate::shared::components::{Badge, CardAnimated, EmptyState, TableTotalsRow};
use contracts::dashboards::d601_analytics::{
    month_name, ordered_overview, ChannelOverview, ChannelPerformance, ChannelTotals,
};
use contracts::shared::channels::{channel_tone, sort_by_channel, CHANNEL_ORDER};
use contracts::shared::number_format::{
    format_billions, format_currency, format_fixed, format_grouped, format_ratio,
};
use leptos::prelude::*;

fn channel_color(channel: &str) -> &'static str {
    match channel {
        "Industry" => "#3b82f6",
        "Retail" => "#10b981",
        "Project" => "#f59e0b",
        _ => "#94a3b8",
    }
}

/// Profitability table row built from an owned overview row
#[derive(Debug, PartialEq)]
struct ProfitabilityRow {
    channel: String,
    tone: &'static str,
    revenue: String,
    profit: String,
    margin: String,
    deals: u64,
}

impl From<ChannelOverview> for ProfitabilityRow {
    fn from(row: ChannelOverview) -> Self {
        Self {
            tone: channel_tone(&row.channel),
            revenue: format_grouped(row.revenue),
            profit: format_grouped(row.profit),
            margin: format!("{}%", format_fixed(row.margin, 0)),
            deals: row.deals,
            channel: row.channel,
        }
    }
}

/// Channel cards, radar, stacked monthly trend and profitability table
#[component]
pub fn ChannelTab(data: Option<ChannelPerformance>) -> impl IntoView {
    let Some(data) = data.filter(|d| !d.overview.is_empty()) else {
        return view! { <EmptyState message="No channel data available." /> }.into_any();
    };

    let overview = ordered_overview(&data.overview);
    let totals = ChannelTotals::from_rows(&overview);

    let mut radar_points = data.radar_data.clone();
    sort_by_channel(&mut radar_points, &CHANNEL_ORDER, |p| p.channel.as_str());
    let radar_series: Vec<Series> = radar_points
        .iter()
        .map(|p| {
            Series::dense(
                p.channel.clone(),
                channel_color(&p.channel),
                vec![p.revenue, p.profit, p.volume],
            )
        })
        .collect();
    let radar_axes = vec!["Revenue".to_string(), "Profit".to_string(), "Volume".to_string()];

    let months: Vec<String> = data
        .monthly_trend
        .iter()
        .map(|m| month_name(m.month).to_string())
        .collect();
    let trend_series: Vec<Series> = CHANNEL_ORDER
        .iter()
        .enumerate()
        .map(|(i, channel)| {
            Series::dense(
                *channel,
                channel_color(channel),
                data.monthly_trend.iter().map(|m| m.values()[i]).collect(),
            )
        })
        .collect();

    let cards = overview
        .clone()
        .into_iter()
        .map(|row| {
            let tone = channel_tone(&row.channel).to_string();
            view! {
                <div class="channel-card">
                    <Badge tone=tone>{row.channel}</Badge>
                    <div class="channel-card__revenue">{format_billions(row.revenue, 2)}</div>
                    <div class="channel-card__stats">
                        <span>{format!("Margin: {}", format_ratio(row.margin, 1))}</span>
                        <span>{format!("Deals: {}", row.deals)}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    let table_rows = overview
        .into_iter()
        .map(ProfitabilityRow::from)
        .map(|row| {
            view! {
                <tr>
                    <td><Badge tone=row.tone.to_string()>{row.channel}</Badge></td>
                    <td class="table__cell--right">{row.revenue}</td>
                    <td class="table__cell--right">{row.profit}</td>
                    <td class="table__cell--right">{row.margin}</td>
                    <td class="table__cell--right">{row.deals}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="channel-cards">{cards}</div>

        <div class="dashboard-grid">
            <CardAnimated title="Channel Comparison" subtitle="Normalised to 0-100" delay_ms=60>
                <RadarChart axes=radar_axes series=radar_series />
            </CardAnimated>
            <CardAnimated title="Monthly Revenue by Channel" delay_ms=120>
                <BarChart
                    categories=months
                    series=trend_series
                    stacked=true
                    y_format=billions_axis
                    tooltip_format=format_currency
                />
            </CardAnimated>
        </div>

        <CardAnimated title="Channel Profitability" delay_ms=180>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Channel"</th>
                        <th class="table__cell--right">"Revenue"</th>
                        <th class="table__cell--right">"Profit"</th>
                        <th class="table__cell--right">"Margin"</th>
                        <th class="table__cell--right">"Deals"</th>
                    </tr>
                </thead>
                <tbody>
                    {table_rows}
                    <TableTotalsRow>
                        <td>"Grand Total"</td>
                        <td class="table__cell--right">{format_grouped(totals.revenue)}</td>
                        <td class="table__cell--right">{format_grouped(totals.profit)}</td>
                        <td class="table__cell--right">{format!("{}%", format_fixed(totals.margin, 0))}</td>
                        <td class="table__cell--right">{totals.deals}</td>
                    </TableTotalsRow>
                </tbody>
            </table>
        </CardAnimated>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_colors() {
        assert_eq!(channel_color("Retail"), "#10b981");
        assert_eq!(channel_color("Export"), "#94a3b8");
    }

    #[test]
    fn test_profitability_row_from_owned_overview() {
        let row = ProfitabilityRow::from(ChannelOverview {
            channel: "Retail".into(),
            revenue: 1_500_000.0,
            profit: 250_000.0,
            margin: 16.6,
            deals: 12,
        });
        assert_eq!(row.channel, "Retail");
        assert_eq!(row.tone, channel_tone("Retail"));
        assert_eq!(row.revenue, "1.500.000");
        assert_eq!(row.profit, "250.000");
        assert_eq!(row.margin, "17%");
        assert_eq!(row.deals, 12);
    }
}
