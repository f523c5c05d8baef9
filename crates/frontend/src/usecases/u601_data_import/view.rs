use super::api;
use super::upload_button::UploadButton;
use crate::layout::global_context::{use_app_context, ActivePage};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::usecases::u601_data_import::{ImportKind, ImportResult, ImportStatus};
use leptos::prelude::*;
use thaw::*;

fn alert_class(status: ImportStatus) -> String {
    format!("import-alert import-alert--{}", status.as_str())
}

/// Success / error / info box under an upload button
#[component]
pub fn ImportAlert(result: ImportResult) -> impl IntoView {
    let class = alert_class(result.status);
    let icon_name = match result.status {
        ImportStatus::Success => "check-circle",
        ImportStatus::Error | ImportStatus::Info => "alert-circle",
    };
    let offers_report = result.offers_missing_cogs_report();

    view! {
        <div class=class role="status">
            {icon(icon_name)}
            <div class="import-alert__body">
                <p class="import-alert__message">{result.message.clone()}</p>
                {result.rows_imported.map(|n| view! {
                    <p class="import-alert__detail">{format!("Rows imported: {}", n)}</p>
                })}
                {result.rows_updated.map(|n| view! {
                    <p class="import-alert__detail">{format!("Rows updated: {}", n)}</p>
                })}
                {offers_report.then(|| view! {
                    <div class="import-alert__actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| api::download_missing_cogs_report()
                        >
                            {icon("download")}
                            " Download Missing COGS Report"
                        </Button>
                        <p class="import-alert__hint">
                            "Please fill in the costs in the downloaded file and upload it in Section B below."
                        </p>
                    </div>
                })}
            </div>
        </div>
    }
}

/// Column list shown under each upload section
fn expected_format(columns: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <div class="import-section__format">
            <h3>"Expected File Format:"</h3>
            <ul>
                {columns
                    .iter()
                    .map(|(name, desc)| view! {
                        <li><strong>{*name}</strong>" - "{*desc}</li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

const SALES_COLUMNS: &[(&str, &str)] = &[
    ("Billing Document", "Invoice ID"),
    ("Billing Item", "Line item ID"),
    ("Material", "SKU/Material code"),
    ("Net Value", "Revenue amount"),
    ("Salesman Name", "Salesperson name"),
    ("Billing Date", "Transaction date"),
];

const COGS_COLUMNS: &[(&str, &str)] = &[
    ("Description", "Product description (unique)"),
    ("COGS", "Cost of goods sold"),
];

const TARGET_COLUMNS: &[(&str, &str)] = &[
    ("Salesman Name", "Salesperson name"),
    ("Year", "Target year (e.g., 2025)"),
    ("Semester", "1 or 2"),
    ("Target", "Semester target amount"),
];

#[component]
fn ImportSection(
    kind: ImportKind,
    title: &'static str,
    caption: &'static str,
    icon_name: &'static str,
    columns: &'static [(&'static str, &'static str)],
    /// Tip under the column list
    #[prop(optional)]
    tip: &'static str,
) -> impl IntoView {
    let (result, set_result) = signal(None::<ImportResult>);
    let on_result = Callback::new(move |r: Option<ImportResult>| set_result.set(r));

    view! {
        <section class="import-section">
            <div class="import-section__header">
                <div class="import-section__icon">{icon(icon_name)}</div>
                <div>
                    <h2 class="import-section__title">{title}</h2>
                    <p class="import-section__caption">{caption}</p>
                </div>
            </div>

            <div class="import-section__action">
                <UploadButton kind=kind on_result=on_result />
            </div>

            {move || result.get().map(|r| view! { <ImportAlert result=r /> })}

            {expected_format(columns)}
            {(!tip.is_empty()).then(|| view! { <p class="import-section__tip">{tip}</p> })}
        </section>
    }
}

/// Data management page: sales, COGS and target uploads
#[component]
pub fn DataImportPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <PageFrame page_id="u601_data_import--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <PageHeader
                    title="Data Management"
                    subtitle="Import and manage your sales data and product costs".to_string()
                    icon_name="file-spreadsheet"
                />
            </div>

            <div class="page__content import-page">
                <ImportSection
                    kind=ImportKind::Sales
                    title="Upload Sales Records"
                    caption="Daily task: Import zrsd002 sales data"
                    icon_name="upload"
                    columns=SALES_COLUMNS
                />
                <ImportSection
                    kind=ImportKind::Cogs
                    title="Update Product Costs (COGS)"
                    caption="Maintain accurate cost prices for profit calculation"
                    icon_name="dollar"
                    columns=COGS_COLUMNS
                    tip="After updating COGS, re-upload sales data to recalculate profits with the new costs."
                />
                <ImportSection
                    kind=ImportKind::Targets
                    title="Upload Sales Targets"
                    caption="Set monthly goals for KPI tracking"
                    icon_name="target"
                    columns=TARGET_COLUMNS
                    tip="Semester targets are automatically divided into 6 monthly targets for precise tracking."
                />

                <div class="import-page__back">
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(ActivePage::Dashboard);
                    }>
                        "← Back to Dashboard"
                    </a>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(columns: &[(&'static str, &'static str)]) -> Vec<&'static str> {
        columns.iter().map(|(name, _)| *name).collect()
    }

    #[test]
    fn test_alert_class_per_status() {
        assert_eq!(alert_class(ImportStatus::Success), "import-alert import-alert--success");
        assert_eq!(alert_class(ImportStatus::Info), "import-alert import-alert--info");
    }

    #[test]
    fn test_section_columns() {
        assert_eq!(
            names(SALES_COLUMNS),
            vec!["Billing Document", "Billing Item", "Material", "Net Value", "Salesman Name", "Billing Date"]
        );
        assert_eq!(names(COGS_COLUMNS), vec!["Description", "COGS"]);
        assert_eq!(names(TARGET_COLUMNS), vec!["Salesman Name", "Year", "Semester", "Target"]);
    }
}
