//! Totals and ratios derived on the client for the channel and debt tables

use super::dto::{ChannelOverview, DebtChannelRow, DebtKpis};
use crate::shared::channels::{sort_by_channel, CHANNEL_ORDER, DEBT_CHANNEL_ORDER};

/// `part / whole * 100`, or 0 when `whole` is not positive
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Channel profitability
// ---------------------------------------------------------------------------

/// Overview rows in canonical channel order
pub fn ordered_overview(rows: &[ChannelOverview]) -> Vec<ChannelOverview> {
    let mut rows = rows.to_vec();
    sort_by_channel(&mut rows, &CHANNEL_ORDER, |r| r.channel.as_str());
    rows
}

/// Grand total row of the profitability table
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelTotals {
    pub revenue: f64,
    pub profit: f64,
    pub deals: u64,
    /// total profit / total revenue, not a mean of row margins
    pub margin: f64,
}

impl ChannelTotals {
    pub fn from_rows(rows: &[ChannelOverview]) -> Self {
        let revenue: f64 = rows.iter().map(|r| r.revenue).sum();
        let profit: f64 = rows.iter().map(|r| r.profit).sum();
        let deals = rows.iter().map(|r| r.deals).sum();
        Self {
            revenue,
            profit,
            deals,
            margin: percent_of(profit, revenue),
        }
    }
}

// ---------------------------------------------------------------------------
// Debt / collections
// ---------------------------------------------------------------------------

impl DebtKpis {
    /// Bad debt as a share of total outstanding, percent
    pub fn bad_debt_share(&self) -> f64 {
        percent_of(self.bad_debt, self.total_outstanding)
    }
}

impl DebtChannelRow {
    pub fn collection_rate(&self) -> f64 {
        percent_of(self.collected, self.outstanding)
    }
}

/// Division summary rows: Industry, Retail, Project, Others, then the rest
pub fn ordered_divisions(rows: &[DebtChannelRow]) -> Vec<DebtChannelRow> {
    let mut rows = rows.to_vec();
    sort_by_channel(&mut rows, &DEBT_CHANNEL_ORDER, |r| r.channel.as_str());
    rows
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DebtTotals {
    pub outstanding: f64,
    pub collected: f64,
    pub collection_rate: f64,
}

impl DebtTotals {
    pub fn from_rows(rows: &[DebtChannelRow]) -> Self {
        let outstanding: f64 = rows.iter().map(|r| r.outstanding).sum();
        let collected: f64 = rows.iter().map(|r| r.collected).sum();
        Self {
            outstanding,
            collected,
            collection_rate: percent_of(collected, outstanding),
        }
    }
}

/// Fixed colour ramp for the six aging buckets, youngest first
pub const AGING_COLORS: [&str; 6] = [
    "#52c41a", "#73d13d", "#faad14", "#ff7a45", "#ff4d4f", "#cf1322",
];

/// Colour of the aging bar at `index`; extra buckets reuse the oldest colour
pub fn aging_color(index: usize) -> &'static str {
    AGING_COLORS[index.min(AGING_COLORS.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(name: &str, revenue: f64, profit: f64, deals: u64) -> ChannelOverview {
        ChannelOverview {
            channel: name.into(),
            revenue,
            profit,
            margin: percent_of(profit, revenue),
            deals,
        }
    }

    fn debt(name: &str, outstanding: f64, collected: f64) -> DebtChannelRow {
        DebtChannelRow {
            channel: name.into(),
            outstanding,
            collected,
        }
    }

    #[test]
    fn test_grand_margin_is_revenue_weighted() {
        let rows = vec![channel("Industry", 100.0, 20.0, 2), channel("Retail", 200.0, 10.0, 5)];
        let totals = ChannelTotals::from_rows(&rows);
        assert_eq!(totals.revenue, 300.0);
        assert_eq!(totals.profit, 30.0);
        assert_eq!(totals.deals, 7);
        assert!((totals.margin - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_grand_margin_without_revenue() {
        assert_eq!(ChannelTotals::from_rows(&[]).margin, 0.0);
        let rows = vec![channel("Project", 0.0, -5.0, 1)];
        assert_eq!(ChannelTotals::from_rows(&rows).margin, 0.0);
    }

    #[test]
    fn test_collection_rate_guards_zero_outstanding() {
        let row = debt("Retail", 0.0, 50.0);
        assert_eq!(row.collection_rate(), 0.0);
        assert!(row.collection_rate().is_finite());

        assert_eq!(debt("Retail", 200.0, 50.0).collection_rate(), 25.0);
    }

    #[test]
    fn test_bad_debt_share_with_zero_outstanding() {
        let kpis = DebtKpis {
            total_outstanding: 0.0,
            bad_debt: 12.0,
            ..Default::default()
        };
        assert_eq!(kpis.bad_debt_share(), 0.0);

        let kpis = DebtKpis {
            total_outstanding: 400.0,
            bad_debt: 50.0,
            ..Default::default()
        };
        assert_eq!(kpis.bad_debt_share(), 12.5);
    }

    #[test]
    fn test_debt_totals_from_sums() {
        let rows = vec![debt("Industry", 100.0, 90.0), debt("Others", 300.0, 10.0)];
        let totals = DebtTotals::from_rows(&rows);
        assert_eq!(totals.outstanding, 400.0);
        assert_eq!(totals.collected, 100.0);
        assert_eq!(totals.collection_rate, 25.0);
    }

    #[test]
    fn test_orderings() {
        let rows = vec![
            channel("Project", 1.0, 0.0, 0),
            channel("Industry", 1.0, 0.0, 0),
            channel("Retail", 1.0, 0.0, 0),
        ];
        let names: Vec<String> = ordered_overview(&rows).into_iter().map(|r| r.channel).collect();
        assert_eq!(names, vec!["Industry", "Retail", "Project"]);

        let rows = vec![debt("Others", 1.0, 0.0), debt("Export", 1.0, 0.0), debt("Project", 1.0, 0.0)];
        let names: Vec<String> = ordered_divisions(&rows).into_iter().map(|r| r.channel).collect();
        assert_eq!(names, vec!["Project", "Others", "Export"]);
    }

    #[test]
    fn test_aging_color_ramp() {
        assert_eq!(aging_color(0), "#52c41a");
        assert_eq!(aging_color(5), "#cf1322");
        assert_eq!(aging_color(9), "#cf1322");
    }
}
