//! TopHeader component - application top navigation bar with the page switcher.

use crate::layout::global_context::{use_app_context, ActivePage};
use crate::shared::icons::icon;
use leptos::prelude::*;

fn page_icon(page: ActivePage) -> &'static str {
    match page {
        ActivePage::Dashboard => "dashboard",
        ActivePage::Analytics => "analytics",
        ActivePage::DataImport => "upload",
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("bar-chart")}
                <span class="top-header__title">"BI Command Center"</span>
            </div>

            <nav class="top-header__nav">
                {ActivePage::ALL
                    .into_iter()
                    .map(|page| {
                        let is_active = move || ctx.active.get() == page;
                        view! {
                            <button
                                class="top-header__nav-btn"
                                class:top-header__nav-btn--active=is_active
                                on:click=move |_| ctx.navigate(page)
                            >
                                {icon(page_icon(page))}
                                <span>{page.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
