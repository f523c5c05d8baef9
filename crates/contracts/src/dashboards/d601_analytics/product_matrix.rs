use super::dto::{LeaderboardEntry, ProductMatrixPoint};
use crate::shared::number_format::{format_billions, format_fixed};

/// Margin classification of a product bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginBucket {
    /// margin > 20
    High,
    /// 10 < margin <= 20
    Medium,
    /// margin <= 10
    Low,
}

impl MarginBucket {
    pub fn from_margin(margin: f64) -> Self {
        if margin > 20.0 {
            MarginBucket::High
        } else if margin > 10.0 {
            MarginBucket::Medium
        } else {
            MarginBucket::Low
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MarginBucket::High => "#10b981",
            MarginBucket::Medium => "#f59e0b",
            MarginBucket::Low => "#ef4444",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MarginBucket::High => "High Margin (>20%)",
            MarginBucket::Medium => "Medium Margin (10-20%)",
            MarginBucket::Low => "Low Margin (<10%) - Revenue Trap",
        }
    }

    pub const ALL: [MarginBucket; 3] = [MarginBucket::High, MarginBucket::Medium, MarginBucket::Low];
}

/// Average revenue and margin over the loaded points (plain arithmetic mean)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatrixReference {
    pub avg_revenue: f64,
    pub avg_margin: f64,
}

impl MatrixReference {
    pub fn from_points(points: &[ProductMatrixPoint]) -> Self {
        if points.is_empty() {
            return Self::default();
        }
        let n = points.len() as f64;
        Self {
            avg_revenue: points.iter().map(|p| p.revenue).sum::<f64>() / n,
            avg_margin: points.iter().map(|p| p.margin).sum::<f64>() / n,
        }
    }
}

impl LeaderboardEntry {
    /// actual - target; tooltip only
    pub fn gap(&self) -> f64 {
        self.actual - self.target
    }

    /// `Gap: +1.25B VND`
    pub fn gap_label(&self) -> String {
        let gap = self.gap();
        let sign = if gap >= 0.0 { "+" } else { "" };
        format!("Gap: {}{} VND", sign, format_billions(gap, 2))
    }

    pub fn achievement_label(&self) -> String {
        format!("Achievement: {}%", format_fixed(self.achievement_rate, 1))
    }
}

/// Leaderboard chart height in px: 50 per row, at least 400
pub fn leaderboard_height(rows: usize) -> u32 {
    (rows as u32).saturating_mul(50).max(400)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(revenue: f64, margin: f64) -> ProductMatrixPoint {
        ProductMatrixPoint {
            name: "P".into(),
            revenue,
            margin,
            ..Default::default()
        }
    }

    #[test]
    fn test_margin_bucket_boundaries() {
        assert_eq!(MarginBucket::from_margin(20.1), MarginBucket::High);
        assert_eq!(MarginBucket::from_margin(20.0), MarginBucket::Medium);
        assert_eq!(MarginBucket::from_margin(10.01), MarginBucket::Medium);
        assert_eq!(MarginBucket::from_margin(10.0), MarginBucket::Low);
        assert_eq!(MarginBucket::from_margin(-5.0), MarginBucket::Low);
    }

    #[test]
    fn test_reference_lines_are_plain_means() {
        let points = vec![point(100.0, 30.0), point(300.0, 0.0), point(200.0, 15.0)];
        let reference = MatrixReference::from_points(&points);
        assert_eq!(reference.avg_revenue, 200.0);
        assert_eq!(reference.avg_margin, 15.0);

        assert_eq!(MatrixReference::from_points(&[]), MatrixReference::default());
    }

    #[test]
    fn test_leaderboard_gap() {
        let entry = LeaderboardEntry {
            name: "Team A".into(),
            actual: 3_250_000_000.0,
            target: 2_000_000_000.0,
            achievement_rate: 162.5,
            ..Default::default()
        };
        assert_eq!(entry.gap_label(), "Gap: +1.25B VND");
        assert_eq!(entry.achievement_label(), "Achievement: 162.5%");

        let behind = LeaderboardEntry {
            actual: 1_000_000_000.0,
            target: 1_500_000_000.0,
            ..entry
        };
        assert_eq!(behind.gap_label(), "Gap: -0.50B VND");
    }

    #[test]
    fn test_leaderboard_height() {
        assert_eq!(leaderboard_height(3), 400);
        assert_eq!(leaderboard_height(12), 600);
    }
}
