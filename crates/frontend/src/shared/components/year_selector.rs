use crate::shared::date_utils::year_options;
use crate::shared::http::get_json;
use crate::shared::icons::icon;
use contracts::dashboards::d600_executive::AvailableYears;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Year `<select>` fed by `/api/available-years`.
///
/// Once the list arrives the selection is moved to a year that has data
/// (see [`AvailableYears::resolve`]).
#[component]
pub fn YearSelector(year: RwSignal<i32>) -> impl IntoView {
    let (available, set_available) = signal(Vec::<i32>::new());
    let (loading, set_loading) = signal(true);
    let select_value = RwSignal::new(year.get_untracked().to_string());

    Effect::new(move |_| {
        spawn_local(async move {
            match get_json::<AvailableYears>("/api/available-years").await {
                Ok(years) => {
                    let resolved = years.resolve(year.get_untracked());
                    if resolved != year.get_untracked() {
                        year.set(resolved);
                    }
                    set_available.set(years.years);
                }
                Err(e) => log::error!("Error fetching years: {}", e),
            }
            set_loading.set(false);
        });
    });

    // select -> year
    Effect::new(move |_| {
        if let Ok(y) = select_value.get().parse::<i32>() {
            if y != year.get_untracked() {
                year.set(y);
            }
        }
    });

    // year -> select
    Effect::new(move |_| {
        let y = year.get().to_string();
        if select_value.get_untracked() != y {
            select_value.set(y);
        }
    });

    view! {
        <div class="year-selector">
            {icon("calendar")}
            {move || {
                if loading.get() {
                    view! { <span class="year-selector__loading">"Loading..."</span> }.into_any()
                } else {
                    view! {
                        <Select value=select_value>
                            {year_options(&available.get(), year.get_untracked())
                                .into_iter()
                                .map(|y| view! { <option value=y.to_string()>{y}</option> })
                                .collect_view()}
                        </Select>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
