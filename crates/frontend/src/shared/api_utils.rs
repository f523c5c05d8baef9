//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Backend HTTP port; the host is the one the page was served from
const API_PORT: u16 = 8000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8000 for the analytics backend.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/dashboard?year=2025");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Appends `query` to `path` as a query string; `None` fields are left out.
pub fn with_query<Q: serde::Serialize>(path: &str, query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        Ok(_) => path.to_string(),
        Err(e) => {
            log::error!("failed to encode query for {}: {}", path, e);
            path.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d601_analytics::{AnalyticsQuery, DebtQuery};

    #[test]
    fn test_with_query_skips_missing_params() {
        let query = AnalyticsQuery {
            year: 2025,
            semester: None,
        };
        assert_eq!(
            with_query("/api/analytics/seasonality", &query),
            "/api/analytics/seasonality?year=2025"
        );

        let query = AnalyticsQuery {
            year: 2025,
            semester: Some(2),
        };
        assert_eq!(
            with_query("/api/analytics/seasonality", &query),
            "/api/analytics/seasonality?year=2025&semester=2"
        );

        assert_eq!(
            with_query("/api/debt/overview", &DebtQuery::default()),
            "/api/debt/overview"
        );
    }
}
