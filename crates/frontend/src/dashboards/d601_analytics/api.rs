use crate::shared::api_utils::with_query;
use crate::shared::http::get_json;
use contracts::dashboards::d601_analytics::{
    AnalyticsQuery, ChannelPerformanceResponse, DataEnvelope, DebtOverview, DebtQuery,
    LeaderboardEntry, ProductMatrixPoint, SeasonalityPoint, TopDebtor,
};
use contracts::shared::ApiError;

async fn get_data<T: serde::de::DeserializeOwned>(
    path: &str,
    query: &AnalyticsQuery,
) -> Result<Vec<T>, ApiError> {
    let envelope: DataEnvelope<T> = get_json(&with_query(path, query)).await?;
    Ok(envelope.data)
}

pub async fn product_matrix(query: AnalyticsQuery) -> Result<Vec<ProductMatrixPoint>, ApiError> {
    get_data("/api/analytics/product-matrix", &query).await
}

/// Achievement per salesperson, sorted by the backend
pub async fn target_waterfall(query: AnalyticsQuery) -> Result<Vec<LeaderboardEntry>, ApiError> {
    get_data("/api/analytics/target-waterfall", &query).await
}

pub async fn seasonality(query: AnalyticsQuery) -> Result<Vec<SeasonalityPoint>, ApiError> {
    get_data("/api/analytics/seasonality", &query).await
}

pub async fn channel_performance(
    query: AnalyticsQuery,
) -> Result<ChannelPerformanceResponse, ApiError> {
    get_json(&with_query("/api/analytics/channel-performance", &query)).await
}

/// Debt KPIs for a snapshot; without a date the backend picks the latest one
pub async fn debt_overview(query: &DebtQuery) -> Result<DebtOverview, ApiError> {
    get_json(&with_query("/api/debt/overview", query)).await
}

pub async fn top_customers(query: &DebtQuery) -> Result<Vec<TopDebtor>, ApiError> {
    let envelope: DataEnvelope<TopDebtor> =
        get_json(&with_query("/api/debt/top-customers", query)).await?;
    Ok(envelope.data)
}
