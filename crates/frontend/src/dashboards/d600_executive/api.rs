use crate::shared::api_utils::with_query;
use crate::shared::http::get_json;
use contracts::dashboards::d600_executive::{
    DashboardQuery, DashboardResponse, ForecastQuery, TrendPoint,
};
use contracts::shared::ApiError;

/// KPI and chart bundle for one year
pub async fn get_dashboard(year: i32) -> Result<DashboardResponse, ApiError> {
    let query = DashboardQuery { year: Some(year) };
    get_json(&with_query("/api/dashboard", &query)).await
}

/// Forecast points to merge into the monthly trend
pub async fn get_forecast(year: i32) -> Result<Vec<TrendPoint>, ApiError> {
    get_json(&with_query("/api/forecast", &ForecastQuery { year })).await
}
