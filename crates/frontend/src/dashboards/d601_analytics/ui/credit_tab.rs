use super::panel::DebtData;
use crate::layout::global_context::{use_app_context, ActivePage};
use crate::shared::charts::{billions_axis, BarChart, Series};
use crate::shared::components::{
    Badge, CardAnimated, EmptyState, ErrorBanner, StatCard, TableTotalsRow,
};
use contracts::dashboards::d601_analytics::{
    aging_color, ordered_divisions, DebtKpis, DebtTotals,
};
use contracts::shared::channels::channel_tone;
use contracts::shared::number_format::{
    format_billions, format_currency, format_fixed, format_grouped, format_ratio,
};
use leptos::prelude::*;

const OUTSTANDING_COLOR: &str = "#ef4444";
const COLLECTED_COLOR: &str = "#10b981";
const AGING_SERIES_COLOR: &str = "#faad14";

fn rate(value: f64) -> String {
    format!("{}%", format_fixed(value, 0))
}

fn kpi_amount(value: f64) -> String {
    format_billions(value, 2)
}

fn bad_debt_subtitle(kpis: &DebtKpis) -> String {
    format!("{} of total", format_ratio(kpis.bad_debt_share(), 1))
}

/// Debt snapshot: KPIs, collection by channel, aging, top debtors, divisions
#[component]
pub fn CreditTab(
    data: Option<DebtData>,
    /// Snapshot date, known after the first overview response
    #[prop(into)]
    report_date: Signal<Option<String>>,
    on_date_change: Callback<String>,
    /// Load failure; the date picker stays usable above it
    #[prop(optional_no_strip)]
    error: Option<String>,
) -> impl IntoView {
    let date_picker = move || {
        report_date.get().map(|date| {
            view! {
                <div class="credit-toolbar">
                    <label class="credit-toolbar__label">"Snapshot date"</label>
                    <input
                        type="date"
                        class="credit-toolbar__date"
                        prop:value=date
                        on:change=move |ev| on_date_change.run(event_target_value(&ev))
                    />
                </div>
            }
        })
    };

    if let Some(message) = error {
        return view! {
            {date_picker}
            <ErrorBanner title="Failed to load debt data" message=message />
        }
        .into_any();
    }

    let Some(DebtData {
        overview,
        top_debtors,
    }) = data
    else {
        let ctx = use_app_context();
        return view! {
            {date_picker}
            <EmptyState message="No debt data available. Please upload a debt report first.">
                <a href="#" class="empty-state__link" on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(ActivePage::DataImport);
                }>
                    "→ Go to Data Management"
                </a>
            </EmptyState>
        }
        .into_any();
    };

    let kpis = overview.kpis.clone();
    let divisions = ordered_divisions(&overview.channel_breakdown);
    let totals = DebtTotals::from_rows(&divisions);
    let as_of = overview
        .report_date_label()
        .map(|d| format!("As of {}", d));

    let channel_names: Vec<String> = divisions.iter().map(|r| r.channel.clone()).collect();
    let collection_series = vec![
        Series::dense(
            "Outstanding",
            OUTSTANDING_COLOR,
            divisions.iter().map(|r| r.outstanding).collect(),
        ),
        Series::dense(
            "Collected",
            COLLECTED_COLOR,
            divisions.iter().map(|r| r.collected).collect(),
        ),
    ];

    let aging = overview.aging_breakdown.buckets();
    let aging_labels: Vec<String> = aging.iter().map(|b| b.label.clone()).collect();
    let aging_series = vec![Series::dense(
        "Amount",
        AGING_SERIES_COLOR,
        aging.iter().map(|b| b.amount).collect(),
    )];
    let aging_colors: Vec<String> = (0..aging.len())
        .map(|i| aging_color(i).to_string())
        .collect();

    let debtor_rows = top_debtors
        .into_iter()
        .take(10)
        .enumerate()
        .map(|(i, d)| {
            let tone = channel_tone(&d.channel).to_string();
            view! {
                <tr>
                    <td>{i + 1}</td>
                    <td>
                        <div class="debtor__name">{d.customer_name}</div>
                        <div class="debtor__code">{d.customer_code}</div>
                    </td>
                    <td><Badge tone=tone>{d.channel}</Badge></td>
                    <td class="table__cell--right">{format_grouped(d.total_debt)}</td>
                    <td class="table__cell--right">{format_grouped(d.overdue)}</td>
                </tr>
            }
        })
        .collect_view();

    let division_rows = divisions
        .iter()
        .map(|r| {
            view! {
                <tr>
                    <td>{r.channel.clone()}</td>
                    <td class="table__cell--right">{format_grouped(r.outstanding)}</td>
                    <td class="table__cell--right">{format_grouped(r.collected)}</td>
                    <td class="table__cell--right">{rate(r.collection_rate())}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        {date_picker}
        {as_of.map(|text| view! { <p class="credit-as-of">{text}</p> })}

        <div class="stat-grid">
            <StatCard
                label="Total Outstanding"
                icon_name="dollar"
                value=kpi_amount(kpis.total_outstanding)
                tone="warning"
            />
            <StatCard
                label="Total Collected"
                icon_name="check-circle"
                value=kpi_amount(kpis.total_collected)
                tone="success"
            />
            <StatCard
                label="Collection Rate"
                icon_name="percent"
                value=rate(kpis.collection_rate)
                tone="info"
            />
            <StatCard
                label="Bad Debt"
                icon_name="alert-circle"
                value=kpi_amount(kpis.bad_debt)
                subtitle=Some(bad_debt_subtitle(&kpis))
                tone="accent"
            />
        </div>

        <div class="dashboard-grid">
            <CardAnimated title="Collection by Channel" delay_ms=60>
                <BarChart
                    categories=channel_names
                    series=collection_series
                    y_format=billions_axis
                    tooltip_format=format_currency
                />
            </CardAnimated>
            <CardAnimated title="Aging Structure" delay_ms=120>
                <BarChart
                    categories=aging_labels
                    series=aging_series
                    bar_colors=aging_colors
                    y_format=billions_axis
                    tooltip_format=format_currency
                />
            </CardAnimated>
        </div>

        <div class="dashboard-grid">
            <CardAnimated title="Top 10 Debtors" delay_ms=180>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Customer"</th>
                            <th>"Channel"</th>
                            <th class="table__cell--right">"Total Debt"</th>
                            <th class="table__cell--right">"Overdue"</th>
                        </tr>
                    </thead>
                    <tbody>{debtor_rows}</tbody>
                </table>
            </CardAnimated>
            <CardAnimated title="Division Summary" delay_ms=240>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Division"</th>
                            <th class="table__cell--right">"Outstanding"</th>
                            <th class="table__cell--right">"Collected"</th>
                            <th class="table__cell--right">"Collection Rate"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {division_rows}
                        <TableTotalsRow>
                            <td>"Grand Total"</td>
                            <td class="table__cell--right">{format_grouped(totals.outstanding)}</td>
                            <td class="table__cell--right">{format_grouped(totals.collected)}</td>
                            <td class="table__cell--right">{rate(totals.collection_rate)}</td>
                        </TableTotalsRow>
                    </tbody>
                </table>
            </CardAnimated>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_debt_subtitle_keeps_one_decimal() {
        let kpis = DebtKpis {
            total_outstanding: 1_000.0,
            bad_debt: 4.0,
            ..Default::default()
        };
        assert_eq!(bad_debt_subtitle(&kpis), "0.4% of total");
        assert_eq!(bad_debt_subtitle(&DebtKpis::default()), "0.0% of total");
    }

    #[test]
    fn test_kpi_amount_in_billions() {
        assert_eq!(kpi_amount(12_340_000_000.0), "12.34B");
        assert_eq!(kpi_amount(400_000_000.0), "0.40B");
    }
}
