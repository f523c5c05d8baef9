use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

/// Query for `/api/dashboard`; without a year the backend uses all data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Query for `/api/forecast`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastQuery {
    pub year: i32,
}

/// Headline KPIs. Margin and growth come precomputed from the backend
/// and are shown as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpiSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: f64,
    /// Last month vs previous month, percent
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue_growth: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profit: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profit_growth: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub marketing: f64,
    /// Profit margin, percent
    #[serde(default, deserialize_with = "null_as_default")]
    pub margin: f64,
}

/// One month of the revenue/profit trend.
///
/// Forecast points share this shape; `forecast` is `None` for plain actuals
/// and `revenue`/`profit` are `None` for future months.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub profit: Option<f64>,
    #[serde(default)]
    pub forecast: Option<f64>,
}

/// Named amount: channel and branch distribution, top-N rankings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharePoint {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardCharts {
    pub monthly_trend: Vec<TrendPoint>,
    pub channel_distribution: Vec<SharePoint>,
    pub branch_distribution: Vec<SharePoint>,
    pub top_products: Vec<SharePoint>,
    pub top_salesmen: Vec<SharePoint>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceStatus {
    Success,
    Warning,
    #[default]
    Destructive,
}

/// Salesperson achievement for one semester
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesPerformance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub semester: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actual: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target: f64,
    /// actual / target * 100, computed by the backend
    #[serde(default, deserialize_with = "null_as_default")]
    pub rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PerformanceStatus,
}

/// Response of `/api/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardResponse {
    pub kpi: KpiSnapshot,
    pub charts: DashboardCharts,
    pub sales_performance: Vec<SalesPerformance>,
}

/// Response of `/api/available-years`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailableYears {
    pub years: Vec<i32>,
    pub default_year: Option<i32>,
}

impl AvailableYears {
    /// Year the selector should show: the current one when the backend has
    /// data for it, otherwise the backend default, otherwise the newest year.
    pub fn resolve(&self, current: i32) -> i32 {
        if self.years.is_empty() || self.years.contains(&current) {
            return current;
        }
        self.default_year
            .filter(|y| self.years.contains(y))
            .or_else(|| self.years.iter().copied().max())
            .unwrap_or(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let resp: DashboardResponse = serde_json::from_value(json!({
            "kpi": { "revenue": 1500.0 },
            "charts": { "monthly_trend": [ { "name": "Jan", "revenue": 10.0 } ] }
        }))
        .unwrap();

        assert_eq!(resp.kpi.revenue, 1500.0);
        assert_eq!(resp.kpi.margin, 0.0);
        assert_eq!(resp.charts.monthly_trend[0].profit, None);
        assert!(resp.charts.top_products.is_empty());
        assert!(resp.sales_performance.is_empty());

        let empty: DashboardResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, DashboardResponse::default());
    }

    #[test]
    fn test_partial_rows_decode_with_defaults() {
        let resp: DashboardResponse = serde_json::from_value(json!({
            "charts": {
                "channel_distribution": [ { "name": null, "value": 42.0 }, { "value": null } ]
            },
            "sales_performance": [ { "actual": 80.0, "target": null, "status": null } ]
        }))
        .unwrap();

        let shares = &resp.charts.channel_distribution;
        assert_eq!(shares[0].name, "");
        assert_eq!(shares[0].value, 42.0);
        assert_eq!(shares[1], SharePoint::default());

        let row = &resp.sales_performance[0];
        assert_eq!(row.name, "");
        assert_eq!(row.semester, 0);
        assert_eq!(row.actual, 80.0);
        assert_eq!(row.target, 0.0);
        assert_eq!(row.status, PerformanceStatus::Destructive);
    }

    #[test]
    fn test_sales_performance_status() {
        let row: SalesPerformance = serde_json::from_value(json!({
            "name": "Nguyen Van A", "semester": 1,
            "actual": 120.0, "target": 100.0, "rate": 120.0, "status": "success"
        }))
        .unwrap();
        assert_eq!(row.status, PerformanceStatus::Success);

        let row: SalesPerformance = serde_json::from_value(json!({
            "name": "Tran B", "semester": 2, "status": "destructive"
        }))
        .unwrap();
        assert_eq!(row.status, PerformanceStatus::Destructive);
    }

    #[test]
    fn test_resolve_year() {
        let years = AvailableYears {
            years: vec![2023, 2024, 2025],
            default_year: Some(2024),
        };
        assert_eq!(years.resolve(2025), 2025);
        assert_eq!(years.resolve(2026), 2024);

        let no_default = AvailableYears {
            years: vec![2023, 2024],
            default_year: None,
        };
        assert_eq!(no_default.resolve(2026), 2024);
        assert_eq!(AvailableYears::default().resolve(2026), 2026);
    }
}
