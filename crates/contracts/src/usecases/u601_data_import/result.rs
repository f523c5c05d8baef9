use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::kind::ImportKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportStatus {
    Success,
    #[default]
    Error,
    Info,
}

impl ImportStatus {
    /// Wire name, also the alert's CSS modifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportStatus::Success => "success",
            ImportStatus::Error => "error",
            ImportStatus::Info => "info",
        }
    }
}

/// Outcome of one upload as shown under its button
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportResult {
    pub status: ImportStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_imported: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_updated: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<String>,
    /// Products without cost price; offers the report download
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_count: Option<u64>,
}

impl ImportResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ImportStatus::Success,
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ImportStatus::Error,
            message: message.into(),
            ..Default::default()
        }
    }

    /// The request never got an answer
    pub fn network_failure(detail: impl std::fmt::Display) -> Self {
        Self::error(format!("Network error: {}", detail))
    }

    pub fn offers_missing_cogs_report(&self) -> bool {
        self.missing_count.is_some()
    }
}

/// What the page does with a server answer
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub result: ImportResult,
    /// Open the missing COGS report shortly after showing the result
    pub auto_download: bool,
    /// Reload the dashboard data
    pub refresh_dashboard: bool,
}

impl ImportOutcome {
    /// Shows `result` and does nothing else
    pub fn show(result: ImportResult) -> Self {
        Self {
            result,
            auto_download: false,
            refresh_dashboard: false,
        }
    }
}

fn str_field<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str)
}

fn count_field(body: &Value, key: &str) -> Option<u64> {
    body.get(key).and_then(Value::as_u64)
}

/// Turns the status and raw body of an upload response into the result to show
pub fn interpret_response(kind: ImportKind, http_ok: bool, body: &str) -> ImportOutcome {
    let json: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            return ImportOutcome::show(ImportResult::error(format!(
                "Failed to parse response: {}",
                e
            )))
        }
    };

    let failed = |key: &str| {
        ImportOutcome::show(ImportResult::error(
            str_field(&json, key).unwrap_or(kind.failure_message()),
        ))
    };

    match (kind, http_ok) {
        (ImportKind::Sales, true) | (ImportKind::Cogs, true) => {
            match serde_json::from_value::<ImportResult>(json.clone()) {
                Ok(result) => ImportOutcome::show(result),
                Err(e) => ImportOutcome::show(ImportResult::error(format!(
                    "Failed to parse response: {}",
                    e
                ))),
            }
        }
        (ImportKind::Sales, false) => {
            let missing_cogs = str_field(&json, "status") == Some("error")
                && json.get("report_path").is_some_and(|p| !p.is_null());
            if missing_cogs {
                let result = serde_json::from_value::<ImportResult>(json.clone())
                    .unwrap_or_else(|_| ImportResult::error(kind.failure_message()));
                ImportOutcome {
                    result,
                    auto_download: true,
                    refresh_dashboard: false,
                }
            } else {
                failed("message")
            }
        }
        (ImportKind::Cogs, false) => failed("message"),
        (ImportKind::Targets, true) => {
            let rows = count_field(&json, "rows_processed");
            let message = match str_field(&json, "message") {
                Some(m) => m.to_string(),
                None => format!(
                    "Successfully updated targets for {} records",
                    rows.map(|n| n.to_string()).unwrap_or_default()
                ),
            };
            ImportOutcome::show(ImportResult {
                rows_updated: rows,
                ..ImportResult::success(message)
            })
        }
        (ImportKind::Targets, false) => failed("error"),
        (ImportKind::Generic, true) if json.get("error").is_none() => ImportOutcome {
            result: ImportResult {
                rows_imported: count_field(&json, "rows_processed"),
                ..ImportResult::success("Data loaded successfully!")
            },
            auto_download: false,
            refresh_dashboard: true,
        },
        (ImportKind::Generic, _) => failed("error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_name_matches_wire_form() {
        for status in [ImportStatus::Success, ImportStatus::Error, ImportStatus::Info] {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire.as_str(), Some(status.as_str()));
        }
    }

    #[test]
    fn test_sales_success_passes_body_through() {
        let body = r#"{"status":"success","message":"Imported 120 rows","rows_imported":120}"#;
        let outcome = interpret_response(ImportKind::Sales, true, body);
        assert_eq!(outcome.result.status, ImportStatus::Success);
        assert_eq!(outcome.result.message, "Imported 120 rows");
        assert_eq!(outcome.result.rows_imported, Some(120));
        assert!(!outcome.auto_download);
    }

    #[test]
    fn test_sales_missing_cogs_triggers_download() {
        let body = r#"{
            "status": "error",
            "message": "15 products have no COGS",
            "report_path": "reports/missing_cogs.xlsx",
            "missing_count": 15
        }"#;
        let outcome = interpret_response(ImportKind::Sales, false, body);
        assert!(outcome.auto_download);
        assert_eq!(outcome.result.missing_count, Some(15));
        assert!(outcome.result.offers_missing_cogs_report());
        assert_eq!(outcome.result.message, "15 products have no COGS");
    }

    #[test]
    fn test_sales_plain_failure() {
        let outcome = interpret_response(ImportKind::Sales, false, r#"{"detail":"boom"}"#);
        assert_eq!(outcome.result, ImportResult::error("Import failed"));
        assert!(!outcome.auto_download);

        let outcome = interpret_response(
            ImportKind::Sales,
            false,
            r#"{"status":"error","message":"Bad header row"}"#,
        );
        assert_eq!(outcome.result.message, "Bad header row");
        assert!(!outcome.auto_download);
    }

    #[test]
    fn test_cogs_failure_message() {
        let outcome = interpret_response(ImportKind::Cogs, false, "{}");
        assert_eq!(outcome.result.message, "COGS import failed");
    }

    #[test]
    fn test_targets_success_reports_rows() {
        let outcome = interpret_response(ImportKind::Targets, true, r#"{"rows_processed":42}"#);
        assert_eq!(outcome.result.status, ImportStatus::Success);
        assert_eq!(
            outcome.result.message,
            "Successfully updated targets for 42 records"
        );
        assert_eq!(outcome.result.rows_updated, Some(42));

        let outcome = interpret_response(
            ImportKind::Targets,
            false,
            r#"{"error":"Missing column Semester"}"#,
        );
        assert_eq!(outcome.result, ImportResult::error("Missing column Semester"));
    }

    #[test]
    fn test_generic_upload() {
        let outcome = interpret_response(ImportKind::Generic, true, r#"{"rows_processed":10}"#);
        assert_eq!(outcome.result.message, "Data loaded successfully!");
        assert_eq!(outcome.result.rows_imported, Some(10));
        assert!(outcome.refresh_dashboard);

        let outcome = interpret_response(ImportKind::Generic, true, r#"{"error":"Empty sheet"}"#);
        assert_eq!(outcome.result, ImportResult::error("Empty sheet"));
        assert!(!outcome.refresh_dashboard);

        let outcome = interpret_response(ImportKind::Generic, false, "{}");
        assert_eq!(outcome.result.message, "Failed to upload data.");
    }

    #[test]
    fn test_undecodable_body() {
        let outcome = interpret_response(ImportKind::Cogs, true, "<html>502</html>");
        assert_eq!(outcome.result.status, ImportStatus::Error);
        assert!(outcome.result.message.starts_with("Failed to parse response"));
    }

    #[test]
    fn test_network_failure() {
        assert_eq!(
            ImportResult::network_failure("Failed to fetch").message,
            "Network error: Failed to fetch"
        );
    }
}
