pub mod kind;
pub mod result;

pub use kind::{ImportKind, UploadPlan, MISSING_COGS_REPORT_PATH, UPLOAD_FIELD};
pub use result::{interpret_response, ImportOutcome, ImportResult, ImportStatus};
