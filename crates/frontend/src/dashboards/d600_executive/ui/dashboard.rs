use super::sales_performance::SalesPerformanceWidget;
use crate::dashboards::d600_executive::api;
use crate::layout::global_context::use_app_context;
use crate::shared::charts::{billions_axis, BarChart, DonutChart, HBar, HBarChart, Series, Slice};
use crate::shared::components::{
    CardAnimated, ErrorBanner, LoadingState, PageHeader, StatCard, YearSelector,
};
use crate::shared::date_utils::current_year;
use crate::shared::latest::LatestOnly;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::usecases::u601_data_import::{ImportAlert, UploadButton};
use contracts::dashboards::d600_executive::{
    merge_forecast, DashboardResponse, SharePoint, TrendPoint,
};
use contracts::shared::number_format::{format_currency, format_fixed, growth};
use contracts::usecases::u601_data_import::{ImportKind, ImportResult};
use futures::future::join;
use leptos::prelude::*;
use leptos::task::spawn_local;

const REVENUE_COLOR: &str = "#10b981";
const PROFIT_COLOR: &str = "#3b82f6";
const FORECAST_COLOR: &str = "#94a3b8";
const BRANCH_COLOR: &str = "#6366f1";
const PRODUCT_COLOR: &str = "#f59e0b";
const SALESMAN_COLOR: &str = "#8b5cf6";

/// Channel donut palette, picked by index
const CHANNEL_PALETTE: [&str; 6] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8", "#82ca9d",
];

fn share_bars(points: &[SharePoint], color: &str) -> Vec<HBar> {
    points
        .iter()
        .map(|p| HBar::new(p.name.clone(), p.value, color))
        .collect()
}

/// Dashed forecast overlay, absent when no month carries a forecast
fn forecast_series(trend: &[TrendPoint]) -> Option<Series> {
    trend.iter().any(|p| p.forecast.is_some()).then(|| {
        Series::new(
            "Forecast",
            FORECAST_COLOR,
            trend.iter().map(|p| p.forecast).collect(),
        )
    })
}

/// Executive overview: KPIs, trend with forecast, distributions and rankings
#[component]
pub fn ExecutiveDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let year = RwSignal::new(current_year());

    let (data, set_data) = signal(None::<DashboardResponse>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (upload_result, set_upload_result) = signal(None::<ImportResult>);
    let latest = LatestOnly::new();

    // Dashboard and forecast are fetched together and applied as one update
    Effect::new(move |_| {
        let year = year.get();
        ctx.data_version.track();

        let ticket = latest.issue();
        set_loading.set(true);
        spawn_local(async move {
            let (dashboard, forecast) =
                join(api::get_dashboard(year), api::get_forecast(year)).await;

            if !latest.is_current(ticket) {
                log::debug!("dropping stale dashboard response for {}", year);
                return;
            }

            match dashboard {
                Ok(mut response) => {
                    match forecast {
                        Ok(points) => merge_forecast(&mut response.charts.monthly_trend, points),
                        Err(e) => log::error!("Error fetching forecast: {}", e),
                    }
                    set_data.set(Some(response));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Error fetching dashboard data: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let on_upload = Callback::new(move |r: Option<ImportResult>| set_upload_result.set(r));

    let kpi = move || data.get().map(|d| d.kpi).unwrap_or_default();
    let revenue = Signal::derive(move || format_currency(kpi().revenue));
    let revenue_growth = Signal::derive(move || data.get().map(|d| growth(d.kpi.revenue_growth)));
    let profit = Signal::derive(move || format_currency(kpi().profit));
    let profit_growth = Signal::derive(move || data.get().map(|d| growth(d.kpi.profit_growth)));
    let marketing = Signal::derive(move || format_currency(kpi().marketing));
    let margin = Signal::derive(move || format!("{}%", format_fixed(kpi().margin, 1)));

    let body = move || {
        let Some(d) = data.get() else {
            return if let Some(message) = error.get().filter(|_| !loading.get()) {
                view! {
                    <ErrorBanner title="Connection Error" message=message />
                }
                .into_any()
            } else {
                view! { <LoadingState message="Loading Executive Dashboard..." /> }.into_any()
            };
        };

        let charts = d.charts;
        let categories: Vec<String> = charts.monthly_trend.iter().map(|p| p.name.clone()).collect();
        let revenue_series = Series::new(
            "Revenue",
            REVENUE_COLOR,
            charts.monthly_trend.iter().map(|p| p.revenue).collect(),
        );
        let profit_series = Series::new(
            "Profit",
            PROFIT_COLOR,
            charts.monthly_trend.iter().map(|p| p.profit).collect(),
        );
        let forecast_line = forecast_series(&charts.monthly_trend);

        let slices: Vec<Slice> = charts
            .channel_distribution
            .iter()
            .enumerate()
            .map(|(i, p)| Slice {
                label: p.name.clone(),
                value: p.value,
                color: CHANNEL_PALETTE[i % CHANNEL_PALETTE.len()].to_string(),
            })
            .collect();

        view! {
            <div class="dashboard-grid dashboard-grid--wide">
                <CardAnimated title="Revenue & Profit Trend" subtitle="Monthly, with forecast" delay_ms=0>
                    <BarChart
                        categories=categories
                        series=vec![revenue_series, profit_series]
                        line=forecast_line
                        y_format=billions_axis
                        tooltip_format=format_currency
                    />
                </CardAnimated>
            </div>

            <div class="dashboard-grid">
                <CardAnimated title="Revenue by Channel" delay_ms=60>
                    <DonutChart slices=slices value_format=format_currency />
                </CardAnimated>
                <CardAnimated title="Revenue by Branch" delay_ms=120>
                    <HBarChart
                        rows=share_bars(&charts.branch_distribution, BRANCH_COLOR)
                        x_format=billions_axis
                        tooltip_format=format_currency
                    />
                </CardAnimated>
                <CardAnimated title="Top Products" subtitle="By revenue" delay_ms=180>
                    <HBarChart
                        rows=share_bars(&charts.top_products, PRODUCT_COLOR)
                        x_format=billions_axis
                        tooltip_format=format_currency
                    />
                </CardAnimated>
                <CardAnimated title="Top Salesmen" subtitle="By revenue" delay_ms=240>
                    <HBarChart
                        rows=share_bars(&charts.top_salesmen, SALESMAN_COLOR)
                        x_format=billions_axis
                        tooltip_format=format_currency
                    />
                </CardAnimated>
            </div>

            <SalesPerformanceWidget rows=d.sales_performance />
        }
        .into_any()
    };

    view! {
        <PageFrame page_id="d600_executive--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <PageHeader
                    title="Executive Dashboard"
                    subtitle="Real-time business performance overview".to_string()
                    icon_name="dashboard"
                >
                    <YearSelector year=year />
                    <UploadButton
                        kind=ImportKind::Generic
                        on_result=on_upload
                        label="Upload Excel Data"
                    />
                    <UploadButton kind=ImportKind::Cogs on_result=on_upload secondary=true />
                    <UploadButton kind=ImportKind::Targets on_result=on_upload secondary=true />
                </PageHeader>
            </div>

            <div class="page__content">
                {move || upload_result.get().map(|r| view! { <ImportAlert result=r /> })}

                <div class="stat-grid">
                    <StatCard
                        label="Total Revenue"
                        icon_name="dollar"
                        value=revenue
                        growth=revenue_growth
                        tone="success"
                    />
                    <StatCard
                        label="Gross Profit"
                        icon_name="trending-up"
                        value=profit
                        growth=profit_growth
                        tone="info"
                    />
                    <StatCard
                        label="Marketing Spend"
                        icon_name="megaphone"
                        value=marketing
                        tone="warning"
                    />
                    <StatCard
                        label="Profit Margin"
                        icon_name="percent"
                        value=margin
                        tone="accent"
                    />
                </div>

                {body}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(name: &str, forecast: Option<f64>) -> TrendPoint {
        TrendPoint {
            name: name.into(),
            revenue: Some(1.0),
            forecast,
            ..Default::default()
        }
    }

    #[test]
    fn test_forecast_series_keeps_gaps() {
        let trend = vec![month("Jan", None), month("Feb", Some(5.0))];
        let line = forecast_series(&trend).unwrap();
        assert_eq!(line.values, vec![None, Some(5.0)]);
        assert_eq!(line.color, FORECAST_COLOR);
    }

    #[test]
    fn test_no_forecast_means_no_line() {
        assert_eq!(forecast_series(&[month("Jan", None)]), None);
        assert_eq!(forecast_series(&[]), None);
    }
}
