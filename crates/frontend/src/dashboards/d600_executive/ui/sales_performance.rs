use crate::shared::components::{Badge, CardAnimated, EmptyState};
use crate::shared::icons::icon;
use contracts::dashboards::d600_executive::sales_performance::progress_width;
use contracts::dashboards::d600_executive::{
    initials, AchievementBadge, PerformanceFilter, SalesPerformance, SortOrder,
};
use contracts::shared::number_format::{format_compact, format_fixed};
use leptos::prelude::*;
use thaw::*;

fn semester_from_value(value: &str) -> Option<u8> {
    value.parse().ok()
}

/// Salesperson achievement list with search, semester filter and rate sort.
///
/// Renders nothing when `rows` is empty.
#[component]
pub fn SalesPerformanceWidget(rows: Vec<SalesPerformance>) -> impl IntoView {
    if rows.is_empty() {
        return ().into_any();
    }

    let rows = StoredValue::new(rows);
    let search = RwSignal::new(String::new());
    let semester = RwSignal::new("all".to_string());
    let order = RwSignal::new(SortOrder::default());

    let filtered = Memo::new(move |_| {
        let filter = PerformanceFilter {
            search: search.get(),
            semester: semester_from_value(&semester.get()),
            order: order.get(),
        };
        rows.with_value(|rows| filter.apply(rows))
    });

    let row_view = |row: SalesPerformance| {
        let badge = AchievementBadge::from_rate(row.rate);
        let bar_style = format!("width: {}%;", format_fixed(progress_width(row.rate), 1));
        view! {
            <div class="performance-row">
                <div class="performance-row__avatar">{initials(&row.name)}</div>
                <div class="performance-row__main">
                    <div class="performance-row__title">
                        <span class="performance-row__name">{row.name.clone()}</span>
                        <span class="performance-row__semester">
                            {format!("Semester {}", row.semester)}
                        </span>
                        <Badge tone=badge.tone().to_string()>{badge.label()}</Badge>
                    </div>
                    <div class="progress">
                        <div
                            class=format!("progress__bar progress__bar--{}", badge.tone())
                            style=bar_style
                        ></div>
                    </div>
                    <div class="performance-row__numbers">
                        <span>{format!("Actual: {}", format_compact(row.actual))}</span>
                        <span>{format!("Target: {}", format_compact(row.target))}</span>
                    </div>
                </div>
                <div class="performance-row__rate">{format!("{}%", format_fixed(row.rate, 1))}</div>
            </div>
        }
    };

    view! {
        <CardAnimated title="Sales Performance" subtitle="Achievement vs semester target" delay_ms=300>
            <div class="performance-toolbar">
                <div class="performance-toolbar__search">
                    {icon("search")}
                    <Input value=search placeholder="Search salesman..." />
                </div>
                <Select value=semester size=SelectSize::Small>
                    <option value="all">"All Semesters"</option>
                    <option value="1">"Semester 1"</option>
                    <option value="2">"Semester 2"</option>
                </Select>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| order.update(|o| *o = o.toggled())
                >
                    {icon("sort")}
                    {move || format!(" {}", order.get().label())}
                </Button>
                <span class="performance-toolbar__count">
                    {move || format!("{} Results", filtered.get().len())}
                </span>
            </div>

            {move || {
                let rows = filtered.get();
                if rows.is_empty() {
                    view! {
                        <EmptyState message="No results found">
                            <p class="empty-state__hint">"Try adjusting your search or filters"</p>
                        </EmptyState>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="performance-list">
                            {rows.into_iter().map(row_view).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </CardAnimated>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_select_values() {
        assert_eq!(semester_from_value("all"), None);
        assert_eq!(semester_from_value("1"), Some(1));
        assert_eq!(semester_from_value("2"), Some(2));
    }
}
