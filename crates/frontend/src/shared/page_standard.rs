//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{module}--{category}` (e.g. `"d600_executive--dashboard"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the module name searchable: copy the id from the
//! DOM inspector and it leads to the `dashboards/d600_executive/` directory.

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Use-case page (imports and other actions).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Validate that a page id matches the `{module}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("d601_analytics--dashboard"));
        assert!(!is_valid_page_id("d601_analytics"));
        assert!(!is_valid_page_id("--dashboard"));
    }
}
