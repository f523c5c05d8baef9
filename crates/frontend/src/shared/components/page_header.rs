use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page title block with an actions area on the right (selectors, upload buttons)
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,

    #[prop(optional, into)] subtitle: MaybeProp<String>,

    /// Icon name shown before the title
    #[prop(optional)]
    icon_name: Option<&'static str>,

    /// Actions area on the right
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {icon_name.map(|name| view! { <div class="page-header__icon">{icon(name)}</div> })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
