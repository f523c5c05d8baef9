use serde::{Deserialize, Serialize};

use super::result::ImportResult;

const EXCEL_ONLY: &str = "Please select an Excel file (.xlsx or .xls)";
const EXCEL_OR_CSV: &str = "Please select an Excel or CSV file (.xlsx, .xls, or .csv)";

/// Report listing products that arrived without a cost price
pub const MISSING_COGS_REPORT_PATH: &str = "/api/download/missing-cogs-report";

/// Multipart field every upload endpoint reads the file from
pub const UPLOAD_FIELD: &str = "file";

/// Kind of file being uploaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    /// Sales records (daily zrsd002 export)
    Sales,
    /// Product cost prices
    Cogs,
    /// Semester targets per salesman
    Targets,
    /// Quick upload from the dashboard header
    Generic,
}

impl ImportKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            ImportKind::Sales => "/api/import/sales",
            ImportKind::Cogs => "/api/import/cogs",
            ImportKind::Targets => "/api/upload-target",
            ImportKind::Generic => "/api/upload",
        }
    }

    pub fn accepted_extensions(self) -> &'static [&'static str] {
        match self {
            ImportKind::Targets => &[".xlsx", ".xls", ".csv"],
            _ => &[".xlsx", ".xls"],
        }
    }

    /// Value for the `accept` attribute of the file input
    pub fn accept_attr(self) -> String {
        self.accepted_extensions().join(",")
    }

    pub fn invalid_file_message(self) -> &'static str {
        match self {
            ImportKind::Targets => EXCEL_OR_CSV,
            _ => EXCEL_ONLY,
        }
    }

    /// Message when the server rejects the upload without saying why
    pub fn failure_message(self) -> &'static str {
        match self {
            ImportKind::Sales => "Import failed",
            ImportKind::Cogs => "COGS import failed",
            ImportKind::Targets => "Target import failed",
            ImportKind::Generic => "Failed to upload data.",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            ImportKind::Sales => "Upload Sales Data (.xlsx)",
            ImportKind::Cogs => "Update COGS Prices (.xlsx)",
            ImportKind::Targets => "Upload Targets (.xlsx, .csv)",
            ImportKind::Generic => "Upload Excel Data",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            ImportKind::Sales => "Processing Sales Data...",
            ImportKind::Cogs => "Updating Prices...",
            ImportKind::Targets => "Processing Targets...",
            ImportKind::Generic => "Processing Data...",
        }
    }

    /// Case-insensitive extension check
    pub fn accepts(self, file_name: &str) -> bool {
        let name = file_name.to_ascii_lowercase();
        self.accepted_extensions()
            .iter()
            .any(|ext| name.ends_with(ext))
    }

    /// Validates the chosen file before anything is sent.
    ///
    /// A rejected file yields the error result to show; no request is made.
    pub fn prepare(self, file_name: &str) -> Result<UploadPlan, ImportResult> {
        if !self.accepts(file_name) {
            return Err(ImportResult::error(self.invalid_file_message()));
        }
        Ok(UploadPlan {
            kind: self,
            endpoint: self.endpoint(),
            file_name: file_name.to_string(),
        })
    }
}

/// Validated upload, ready to be posted as multipart form data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPlan {
    pub kind: ImportKind,
    pub endpoint: &'static str,
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u601_data_import::ImportStatus;

    #[test]
    fn test_docx_is_rejected_without_request() {
        let rejected = ImportKind::Sales.prepare("report.docx").unwrap_err();
        assert_eq!(rejected.status, ImportStatus::Error);
        assert_eq!(rejected.message, "Please select an Excel file (.xlsx or .xls)");
        assert_eq!(rejected.rows_imported, None);
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        let plan = ImportKind::Cogs.prepare("COGS_2025.XLSX").unwrap();
        assert_eq!(plan.endpoint, "/api/import/cogs");
        assert_eq!(plan.file_name, "COGS_2025.XLSX");
        assert!(ImportKind::Generic.accepts("data.Xls"));
    }

    #[test]
    fn test_csv_only_for_targets() {
        assert!(ImportKind::Targets.prepare("targets.csv").is_ok());
        let rejected = ImportKind::Sales.prepare("sales.csv").unwrap_err();
        assert_eq!(rejected.message, EXCEL_ONLY);

        let rejected = ImportKind::Targets.prepare("targets.pdf").unwrap_err();
        assert_eq!(
            rejected.message,
            "Please select an Excel or CSV file (.xlsx, .xls, or .csv)"
        );
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(ImportKind::Sales.endpoint(), "/api/import/sales");
        assert_eq!(ImportKind::Targets.endpoint(), "/api/upload-target");
        assert_eq!(ImportKind::Generic.endpoint(), "/api/upload");
        assert_eq!(ImportKind::Targets.accept_attr(), ".xlsx,.xls,.csv");
    }
}
