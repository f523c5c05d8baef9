use crate::shared::icons::icon;
use contracts::shared::number_format::Growth;
use leptos::prelude::*;

/// KPI card: label, formatted value, optional growth badge
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Month-over-month change, shown as `+12.5% vs last month`
    #[prop(into, optional)]
    growth: Signal<Option<Growth>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Accent modifier: "success", "info", "warning", "accent"
    #[prop(optional)]
    tone: &'static str,
) -> impl IntoView {
    let card_class = if tone.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card--{}", tone)
    };

    let growth_view = move || {
        growth.get().map(|g| {
            let (arrow, cls) = if g.is_positive {
                ("trending-up", "stat-card__change stat-card__change--up")
            } else {
                ("trending-down", "stat-card__change stat-card__change--down")
            };
            view! {
                <span class=cls>
                    {icon(arrow)}
                    {format!("{} vs last month", g.signed_label())}
                </span>
            }
        })
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {growth_view}
                {subtitle_view}
            </div>
        </div>
    }
}
