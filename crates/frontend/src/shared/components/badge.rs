use leptos::prelude::*;

/// Pill label. `tone`: "success", "warning", "danger", "info", "accent", "neutral" (default)
#[component]
pub fn Badge(
    #[prop(optional, into)] tone: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let tone_class = move || match tone.get().as_deref().unwrap_or("neutral") {
        "success" => "badge--success",
        "warning" => "badge--warning",
        "danger" => "badge--danger",
        "info" => "badge--info",
        "accent" => "badge--accent",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", tone_class())>
            {children()}
        </span>
    }
}
