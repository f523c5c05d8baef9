use crate::dashboards::d600_executive::ui::ExecutiveDashboard;
use crate::dashboards::d601_analytics::ui::AnalyticsPage;
use crate::layout::global_context::{use_app_context, ActivePage};
use crate::usecases::u601_data_import::view::DataImportPage;
use leptos::prelude::*;

/// Renders the page selected in [`AppGlobalContext`](crate::layout::global_context::AppGlobalContext).
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div data-zone="center" class="app-center" style="flex: 1; overflow: auto;">
            {move || match ctx.active.get() {
                ActivePage::Dashboard => view! { <ExecutiveDashboard /> }.into_any(),
                ActivePage::Analytics => view! { <AnalyticsPage /> }.into_any(),
                ActivePage::DataImport => view! { <DataImportPage /> }.into_any(),
            }}
        </div>
    }
}
