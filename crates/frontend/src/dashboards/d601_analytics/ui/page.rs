use super::channel_tab::ChannelTab;
use super::credit_tab::CreditTab;
use super::leaderboard_tab::LeaderboardTab;
use super::panel::{CoreData, DebtData, Panel};
use super::product_matrix_tab::ProductMatrixTab;
use super::seasonality_tab::SeasonalityTab;
use crate::dashboards::d601_analytics::api;
use crate::shared::components::{ErrorBanner, LoadingState, PageHeader, YearSelector};
use crate::shared::date_utils::current_year;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d601_analytics::{
    AnalyticsQuery, AnalyticsTab, AnalyticsViewState, ChannelPerformance, FetchPlan,
};
use futures::future::{join, join3};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Everything a fetch needs to commit its result
#[derive(Clone, Copy)]
struct Panels {
    state: RwSignal<AnalyticsViewState>,
    core: Panel<CoreData>,
    channel: Panel<ChannelPerformance>,
    debt: Panel<DebtData>,
}

impl Panels {
    fn dispatch(self, plans: Vec<FetchPlan>) {
        for plan in plans {
            log::debug!("analytics fetch: {:?}", plan);
            match &plan {
                FetchPlan::Core(query) => self.fetch_core(*query, plan.clone()),
                FetchPlan::Channel(query) => self.fetch_channel(*query, plan.clone()),
                FetchPlan::Debt(_) => self.fetch_debt(plan.clone()),
            }
        }
    }

    fn fetch_core(self, query: AnalyticsQuery, plan: FetchPlan) {
        let ticket = self.core.begin();
        spawn_local(async move {
            let (matrix, leaderboard, seasonality) = join3(
                api::product_matrix(query),
                api::target_waterfall(query),
                api::seasonality(query),
            )
            .await;

            let result = match (matrix, leaderboard, seasonality) {
                (Ok(matrix), Ok(leaderboard), Ok(seasonality)) => Ok(Some(CoreData {
                    matrix,
                    leaderboard,
                    seasonality,
                })),
                (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => Err(e),
            };

            if self.core.finish(ticket, result, "analytics data") {
                self.state.update(|s| s.mark_loaded(&plan));
            }
        });
    }

    fn fetch_channel(self, query: AnalyticsQuery, plan: FetchPlan) {
        let ticket = self.channel.begin();
        spawn_local(async move {
            let result = api::channel_performance(query)
                .await
                .map(|response| response.into_data());

            if self.channel.finish(ticket, result, "channel performance") {
                self.state.update(|s| s.mark_loaded(&plan));
            }
        });
    }

    fn fetch_debt(self, plan: FetchPlan) {
        let FetchPlan::Debt(query) = plan.clone() else {
            return;
        };
        let ticket = self.debt.begin();
        spawn_local(async move {
            let (overview, top) =
                join(api::debt_overview(&query), api::top_customers(&query)).await;

            let top_debtors = top.unwrap_or_else(|e| {
                log::error!("Error fetching top debtors: {}", e);
                Vec::new()
            });
            let report_date = overview
                .as_ref()
                .ok()
                .filter(|o| o.is_success())
                .and_then(|o| o.report_date.clone());
            let result = overview.map(|overview| {
                overview.is_success().then(|| DebtData {
                    overview,
                    top_debtors,
                })
            });

            if self.debt.finish(ticket, result, "debt data") {
                self.state.update(|s| {
                    s.mark_loaded(&plan);
                    if let Some(date) = &report_date {
                        s.adopt_report_date(date);
                    }
                });
            }
        });
    }
}

fn semester_value(semester: Option<u8>) -> String {
    semester.map_or_else(|| "all".to_string(), |s| s.to_string())
}

/// Deep-dive analytics: product matrix, leaderboard, seasonality,
/// channel profitability and debt.
#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let year = RwSignal::new(current_year());
    let state = RwSignal::new(AnalyticsViewState::new(year.get_untracked()));
    let semester_select = RwSignal::new(semester_value(None));

    let panels = Panels {
        state,
        core: Panel::new(),
        channel: Panel::new(),
        debt: Panel::new(),
    };

    // Runs once on mount too, which issues the first fetch
    Effect::new(move |_| {
        let y = year.get();
        let plans = state.try_update(|s| s.set_year(y)).unwrap_or_default();
        panels.dispatch(plans);
    });

    Effect::new(move |prev: Option<String>| {
        let value = semester_select.get();
        if prev.as_ref() != Some(&value) && prev.is_some() {
            let semester = value.parse::<u8>().ok();
            let plans = state.try_update(|s| s.set_semester(semester)).unwrap_or_default();
            panels.dispatch(plans);
        }
        value
    });

    let select_tab = move |tab: AnalyticsTab| {
        let plans = state.try_update(|s| s.select_tab(tab)).unwrap_or_default();
        panels.dispatch(plans);
    };

    let on_debt_date = Callback::new(move |date: String| {
        let date = (!date.is_empty()).then_some(date);
        let plans = state.try_update(|s| s.set_debt_date(date)).unwrap_or_default();
        panels.dispatch(plans);
    });

    let active_tab = Memo::new(move |_| state.with(|s| s.active_tab));
    let debt_date = Signal::derive(move || state.with(|s| s.selected_debt_date.clone()));

    let tab_body = move || {
        let tab = active_tab.get();
        match tab {
            AnalyticsTab::Channel => {
                let panel = panels.channel;
                if let Some(message) = panel.error.get() {
                    return view! { <ErrorBanner title="Failed to load channel data" message=message /> }.into_any();
                }
                if panel.is_first_load() {
                    return view! { <LoadingState message="Loading channel data..." /> }.into_any();
                }
                view! { <ChannelTab data=panel.data.get() /> }.into_any()
            }
            AnalyticsTab::Credit => {
                let panel = panels.debt;
                let error = panel.error.get();
                if error.is_none() && panel.is_first_load() {
                    return view! { <LoadingState message="Loading debt data..." /> }.into_any();
                }
                view! {
                    <CreditTab
                        data=panel.data.get()
                        report_date=debt_date
                        on_date_change=on_debt_date
                        error=error
                    />
                }
                .into_any()
            }
            _ => {
                let panel = panels.core;
                if let Some(message) = panel.error.get() {
                    return view! { <ErrorBanner title="Failed to load analytics" message=message /> }.into_any();
                }
                if panel.is_first_load() {
                    return view! { <LoadingState message="Loading analytics..." /> }.into_any();
                }
                let data = panel.data.get().unwrap_or_default();
                match tab {
                    AnalyticsTab::Leaderboard => {
                        view! { <LeaderboardTab entries=data.leaderboard /> }.into_any()
                    }
                    AnalyticsTab::Seasonality => {
                        view! { <SeasonalityTab points=data.seasonality /> }.into_any()
                    }
                    _ => view! { <ProductMatrixTab points=data.matrix /> }.into_any(),
                }
            }
        }
    };

    view! {
        <PageFrame page_id="d601_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <PageHeader
                    title="Advanced Analytics"
                    subtitle="Deep-dive into products, salesmen, seasonality and channels".to_string()
                    icon_name="analytics"
                >
                    <YearSelector year=year />
                    <div class="semester-selector">
                        {icon("calendar")}
                        <Select value=semester_select>
                            <option value="all">"Whole Year"</option>
                            <option value="1">"Semester 1"</option>
                            <option value="2">"Semester 2"</option>
                        </Select>
                    </div>
                </PageHeader>
            </div>

            <div class="page__content">
                <div class="analytics-tabs" role="tablist">
                    {AnalyticsTab::ALL
                        .into_iter()
                        .map(|tab| {
                            let appearance = Signal::derive(move || {
                                if active_tab.get() == tab {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            });
                            view! {
                                <Button appearance=appearance on_click=move |_| select_tab(tab)>
                                    {tab.label()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="analytics-tab-body">{tab_body}</div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_select_value() {
        assert_eq!(semester_value(None), "all");
        assert_eq!(semester_value(Some(2)), "2");
        assert_eq!("all".parse::<u8>().ok(), None);
    }
}
