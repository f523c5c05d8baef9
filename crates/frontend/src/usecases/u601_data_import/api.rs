use crate::shared::http::{open_in_new_tab, post_multipart};
use contracts::shared::ApiError;
use contracts::usecases::u601_data_import::{
    interpret_response, ImportOutcome, ImportResult, UploadPlan, MISSING_COGS_REPORT_PATH,
    UPLOAD_FIELD,
};
use gloo_timers::future::TimeoutFuture;

/// Delay before the missing COGS report opens on its own
const AUTO_DOWNLOAD_DELAY_MS: u32 = 1_000;

/// Posts a validated file and interprets the answer. Never fails: transport
/// problems come back as an error result.
pub async fn upload(plan: &UploadPlan, file: &web_sys::File) -> ImportOutcome {
    match post_multipart(plan.endpoint, UPLOAD_FIELD, file).await {
        Ok(reply) => {
            log::info!(
                "{} upload of {} answered {}",
                plan.endpoint,
                plan.file_name,
                reply.status
            );
            interpret_response(plan.kind, reply.ok, &reply.body)
        }
        Err(ApiError::Network(detail)) => {
            log::error!("{} upload failed: {}", plan.endpoint, detail);
            ImportOutcome::show(ImportResult::network_failure(detail))
        }
        Err(e) => {
            log::error!("{} upload failed: {}", plan.endpoint, e);
            ImportOutcome::show(ImportResult::error(e.to_string()))
        }
    }
}

pub fn download_missing_cogs_report() {
    open_in_new_tab(MISSING_COGS_REPORT_PATH);
}

pub async fn download_missing_cogs_report_later() {
    TimeoutFuture::new(AUTO_DOWNLOAD_DELAY_MS).await;
    download_missing_cogs_report();
}
