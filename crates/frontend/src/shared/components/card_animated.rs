//! CardAnimated: thaw Card with the `card-appear` entry animation and an
//! optional chart title.
//!
//! ```rust,ignore
//! <CardAnimated title="Revenue by Channel" delay_ms=80>
//!     <DonutChart slices=slices />
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Heading rendered above the content
    #[prop(optional)]
    title: &'static str,
    /// Small caption under the heading
    #[prop(optional)]
    subtitle: &'static str,
    /// Animation delay in milliseconds, for staggered grids
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline style appended after the animation
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card attr:style=full_style>
            {(!title.is_empty()).then(|| view! {
                <div class="card__header">
                    <h3 class="card__title">{title}</h3>
                    {(!subtitle.is_empty()).then(|| view! {
                        <p class="card__subtitle">{subtitle}</p>
                    })}
                </div>
            })}
            {children()}
        </Card>
    }
}
