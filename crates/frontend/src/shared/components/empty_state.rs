use crate::shared::icons::icon;
use leptos::prelude::*;

/// Placeholder shown instead of a chart or table without data
#[component]
pub fn EmptyState(
    message: &'static str,
    /// Optional call to action under the message
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            {icon("alert-circle")}
            <p class="empty-state__message">{message}</p>
            {children.map(|c| c())}
        </div>
    }
}

/// Centered spinner with a caption
#[component]
pub fn LoadingState(message: &'static str) -> impl IntoView {
    view! {
        <div class="loading-state">
            <thaw::Spinner />
            <p class="loading-state__message">{message}</p>
        </div>
    }
}

/// Red banner for a failed panel
#[component]
pub fn ErrorBanner(
    #[prop(optional)] title: &'static str,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <div class="error-banner">
            {icon("alert-circle")}
            <div>
                {(!title.is_empty()).then(|| view! { <strong>{title}</strong> })}
                <p>{message}</p>
            </div>
        </div>
    }
}
