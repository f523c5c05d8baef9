pub mod center;
pub mod global_context;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |   TopHeader (brand + page switcher)      |
/// +------------------------------------------+
/// |            Center (active page)          |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-main">
                <center::Center />
            </div>
        </div>
    }
}
