use super::api;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::usecases::u601_data_import::{ImportKind, ImportOutcome, ImportResult};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Button with a hidden file input that runs one upload flow.
///
/// `on_result` gets `None` when an upload starts and the result once it is
/// known. Rejected files never reach the network.
#[component]
pub fn UploadButton(
    kind: ImportKind,
    on_result: Callback<Option<ImportResult>>,
    /// Overrides the default label of `kind`
    #[prop(optional)]
    label: Option<&'static str>,
    #[prop(optional)] secondary: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let input_ref = NodeRef::<html::Input>::new();
    let (busy, set_busy) = signal(false);

    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let plan = match kind.prepare(&file.name()) {
            Ok(plan) => plan,
            Err(rejected) => {
                input.set_value("");
                on_result.run(Some(rejected));
                return;
            }
        };

        set_busy.set(true);
        on_result.run(None);
        spawn_local(async move {
            let ImportOutcome {
                result,
                auto_download,
                refresh_dashboard,
            } = api::upload(&plan, &file).await;

            set_busy.set(false);
            input.set_value("");
            on_result.run(Some(result));

            if refresh_dashboard {
                ctx.notify_data_changed();
            }
            if auto_download {
                api::download_missing_cogs_report_later().await;
            }
        });
    };

    let appearance = if secondary {
        ButtonAppearance::Secondary
    } else {
        ButtonAppearance::Primary
    };
    let idle_label = label.unwrap_or(kind.button_label());

    view! {
        <input
            type="file"
            node_ref=input_ref
            accept=kind.accept_attr()
            style="display: none;"
            on:change=on_change
        />
        <Button
            appearance=appearance
            disabled=busy
            on_click=move |_| {
                if let Some(input) = input_ref.get() {
                    input.click();
                }
            }
        >
            {move || if busy.get() {
                view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
            } else {
                icon("upload")
            }}
            " "
            {move || if busy.get() { kind.busy_label() } else { idle_label }}
        </Button>
    }
}
