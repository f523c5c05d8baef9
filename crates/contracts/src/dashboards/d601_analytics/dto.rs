use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::shared::serde_utils::null_as_default;
use chrono::NaiveDate;
use std::fmt;

/// Filter context for `/api/analytics/*`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalyticsQuery {
    pub year: i32,
    /// `None` = whole year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<u8>,
}

/// Filter context for `/api/debt/*`; without a date the backend picks the latest snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DebtQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_date: Option<String>,
}

/// `{ "data": [...] }` wrapper used by the list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Default for DataEnvelope<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

// ---------------------------------------------------------------------------
// Products, leaderboard, seasonality
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductMatrixPoint {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: f64,
    /// Profit margin, percent
    #[serde(default, deserialize_with = "null_as_default")]
    pub margin: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profit: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardStatus {
    Success,
    Warning,
    #[default]
    Danger,
}

impl LeaderboardStatus {
    pub fn color(self) -> &'static str {
        match self {
            LeaderboardStatus::Success => "#10b981",
            LeaderboardStatus::Warning => "#f59e0b",
            LeaderboardStatus::Danger => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actual: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievement_rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: LeaderboardStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityPoint {
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub month: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: f64,
}

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short English month name for 1..=12, empty otherwise
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

// ---------------------------------------------------------------------------
// Channel analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelOverview {
    #[serde(default, deserialize_with = "null_as_default")]
    pub channel: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profit: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub margin: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deals: u64,
}

/// Per-channel metrics normalised to 0..=100 by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelRadarPoint {
    #[serde(default, deserialize_with = "null_as_default")]
    pub channel: String,
    #[serde(rename = "Revenue")]
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: f64,
    #[serde(rename = "Profit")]
    #[serde(default, deserialize_with = "null_as_default")]
    pub profit: f64,
    #[serde(rename = "Volume")]
    #[serde(default, deserialize_with = "null_as_default")]
    pub volume: f64,
    #[serde(rename = "Margin")]
    #[serde(default, deserialize_with = "null_as_default")]
    pub margin: f64,
}

/// Revenue per channel for one month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelMonthlyTrend {
    #[serde(default, deserialize_with = "null_as_default")]
    pub month: u32,
    #[serde(rename = "Industry")]
    #[serde(default, deserialize_with = "null_as_default")]
    pub industry: f64,
    #[serde(rename = "Retail")]
    #[serde(default, deserialize_with = "null_as_default")]
    pub retail: f64,
    #[serde(rename = "Project")]
    #[serde(default, deserialize_with = "null_as_default")]
    pub project: f64,
}

impl ChannelMonthlyTrend {
    /// Values in canonical channel order
    pub fn values(&self) -> [f64; 3] {
        [self.industry, self.retail, self.project]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelPerformance {
    pub overview: Vec<ChannelOverview>,
    pub monthly_trend: Vec<ChannelMonthlyTrend>,
    pub radar_data: Vec<ChannelRadarPoint>,
}

/// Response of `/api/analytics/channel-performance`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelPerformanceResponse {
    pub status: String,
    pub data: Option<ChannelPerformance>,
}

impl ChannelPerformanceResponse {
    /// Payload of a successful response; anything else renders as "no data"
    pub fn into_data(self) -> Option<ChannelPerformance> {
        if self.status == "success" {
            self.data
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Credit control
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebtKpis {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_outstanding: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_collected: f64,
    /// Debt older than 180 days
    #[serde(default, deserialize_with = "null_as_default")]
    pub bad_debt: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub collection_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebtChannelRow {
    #[serde(default, deserialize_with = "null_as_default")]
    pub channel: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub outstanding: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub collected: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgingBucket {
    pub label: String,
    pub amount: f64,
}

/// Aging buckets in the order the backend sent them.
///
/// On the wire this is a JSON object `{ "0-30 days": 1.0, ... }`; key order
/// decides both the bar order and the colour of each bar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgingBreakdown(pub Vec<AgingBucket>);

impl AgingBreakdown {
    pub fn buckets(&self) -> &[AgingBucket] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for AgingBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for bucket in &self.0 {
            map.serialize_entry(&bucket.label, &bucket.amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AgingBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AgingVisitor;

        impl<'de> Visitor<'de> for AgingVisitor {
            type Value = AgingBreakdown;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of aging bucket label to amount")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut buckets = Vec::with_capacity(access.size_hint().unwrap_or(6));
                while let Some((label, amount)) = access.next_entry::<String, Option<f64>>()? {
                    buckets.push(AgingBucket {
                        label,
                        amount: amount.unwrap_or(0.0),
                    });
                }
                Ok(AgingBreakdown(buckets))
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(AgingBreakdown::default())
            }
        }

        deserializer.deserialize_any(AgingVisitor)
    }
}

/// Response of `/api/debt/overview`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebtOverview {
    pub status: String,
    /// Snapshot date, `YYYY-MM-DD`
    pub report_date: Option<String>,
    pub kpis: DebtKpis,
    pub channel_breakdown: Vec<DebtChannelRow>,
    pub aging_breakdown: AgingBreakdown,
}

impl DebtOverview {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// `2025-06-30` shown as `30/06/2025`; unparsable dates pass through
    pub fn report_date_label(&self) -> Option<String> {
        let raw = self.report_date.as_deref()?;
        Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|_| raw.to_string()),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopDebtor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub channel: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_debt: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overdue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_aging_breakdown_keeps_key_order() {
        let raw = r#"{
            "status": "success",
            "report_date": "2025-10-31",
            "kpis": { "total_outstanding": 100.0 },
            "channel_breakdown": [],
            "aging_breakdown": {
                "Current": 5.0, "1-30 days": 4.0, "31-60 days": 3.0,
                "61-90 days": 2.0, "91-180 days": 1.0, ">180 days": null
            }
        }"#;
        let overview: DebtOverview = serde_json::from_str(raw).unwrap();
        let labels: Vec<&str> = overview
            .aging_breakdown
            .buckets()
            .iter()
            .map(|b| b.label.as_str())
            .collect();

        assert_eq!(
            labels,
            vec!["Current", "1-30 days", "31-60 days", "61-90 days", "91-180 days", ">180 days"]
        );
        assert_eq!(overview.aging_breakdown.buckets()[5].amount, 0.0);
        assert!(overview.is_success());
    }

    #[test]
    fn test_failed_overview_decodes_with_defaults() {
        let overview: DebtOverview =
            serde_json::from_value(json!({ "status": "error", "aging_breakdown": null })).unwrap();
        assert!(!overview.is_success());
        assert!(overview.aging_breakdown.is_empty());
        assert_eq!(overview.report_date, None);
    }

    #[test]
    fn test_channel_performance_status_gate() {
        let ok: ChannelPerformanceResponse = serde_json::from_value(json!({
            "status": "success",
            "data": {
                "overview": [{ "channel": "Retail", "revenue": 1.0, "profit": 0.1, "margin": 10.0, "deals": 3 }],
                "monthly_trend": [{ "month": 1, "Industry": 5.0, "Retail": 1.0 }],
                "radar_data": [{ "channel": "Retail", "Revenue": 100.0, "Profit": 80.0, "Volume": 60.0, "Margin": 40.0 }]
            }
        }))
        .unwrap();
        let data = ok.into_data().unwrap();
        assert_eq!(data.monthly_trend[0].values(), [5.0, 1.0, 0.0]);
        assert_eq!(data.radar_data[0].volume, 60.0);

        let failed: ChannelPerformanceResponse =
            serde_json::from_value(json!({ "status": "error", "message": "no data" })).unwrap();
        assert!(failed.into_data().is_none());
    }

    #[test]
    fn test_debt_rows_with_nulls_decode_with_defaults() {
        let overview: DebtOverview = serde_json::from_value(json!({
            "status": "success",
            "kpis": { "total_outstanding": null, "bad_debt": 7.0 },
            "channel_breakdown": [ { "channel": null, "outstanding": null, "collected": 3.0 } ]
        }))
        .unwrap();
        assert_eq!(overview.kpis.total_outstanding, 0.0);
        assert_eq!(overview.kpis.bad_debt, 7.0);
        let row = &overview.channel_breakdown[0];
        assert_eq!(row.channel, "");
        assert_eq!(row.outstanding, 0.0);
        assert_eq!(row.collected, 3.0);

        let env: DataEnvelope<TopDebtor> = serde_json::from_value(json!({
            "data": [ { "customer_name": "Acme", "customer_code": null, "total_debt": null } ]
        }))
        .unwrap();
        let debtor = &env.data[0];
        assert_eq!(debtor.customer_name, "Acme");
        assert_eq!(debtor.customer_code, "");
        assert_eq!(debtor.channel, "");
        assert_eq!(debtor.total_debt, 0.0);
    }

    #[test]
    fn test_analytics_rows_missing_fields_decode_with_defaults() {
        let seasonality: DataEnvelope<SeasonalityPoint> = serde_json::from_value(json!({
            "data": [ { "year": 2025, "revenue": 10.0 } ]
        }))
        .unwrap();
        assert_eq!(seasonality.data[0].month, 0);
        assert_eq!(month_name(seasonality.data[0].month), "");

        let matrix: DataEnvelope<ProductMatrixPoint> = serde_json::from_value(json!({
            "data": [ { "revenue": 5.0, "margin": null } ]
        }))
        .unwrap();
        assert_eq!(matrix.data[0].name, "");
        assert_eq!(matrix.data[0].revenue, 5.0);
        assert_eq!(matrix.data[0].margin, 0.0);

        let leaders: DataEnvelope<LeaderboardEntry> = serde_json::from_value(json!({
            "data": [ { "name": null, "status": null } ]
        }))
        .unwrap();
        assert_eq!(leaders.data[0], LeaderboardEntry::default());
    }

    #[test]
    fn test_envelope_without_data() {
        let env: DataEnvelope<TopDebtor> = serde_json::from_value(json!({})).unwrap();
        assert!(env.data.is_empty());
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "Jan");
        assert_eq!(month_name(12), "Dec");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_report_date_label() {
        let overview = DebtOverview {
            report_date: Some("2025-06-30".into()),
            ..Default::default()
        };
        assert_eq!(overview.report_date_label().as_deref(), Some("30/06/2025"));

        let odd = DebtOverview {
            report_date: Some("Q2".into()),
            ..Default::default()
        };
        assert_eq!(odd.report_date_label().as_deref(), Some("Q2"));
        assert_eq!(DebtOverview::default().report_date_label(), None);
    }
}
