//! Client-side filtering of the sales performance table

use super::dto::SalesPerformance;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Desc,
    Asc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Desc => SortOrder::Asc,
            SortOrder::Asc => SortOrder::Desc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Desc => "Highest",
            SortOrder::Asc => "Lowest",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceFilter {
    pub search: String,
    /// `None` = all semesters
    pub semester: Option<u8>,
    pub order: SortOrder,
}

impl PerformanceFilter {
    /// Name filter (case-insensitive substring), then semester, then rate sort
    pub fn apply(&self, rows: &[SalesPerformance]) -> Vec<SalesPerformance> {
        let needle = self.search.trim().to_lowercase();
        let mut result: Vec<SalesPerformance> = rows
            .iter()
            .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
            .filter(|r| self.semester.map_or(true, |s| r.semester == s))
            .cloned()
            .collect();

        result.sort_by(|a, b| match self.order {
            SortOrder::Desc => b.rate.total_cmp(&a.rate),
            SortOrder::Asc => a.rate.total_cmp(&b.rate),
        });
        result
    }
}

/// Achievement badge shown next to each salesperson
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementBadge {
    Excellent,
    Good,
    Lagging,
}

impl AchievementBadge {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 100.0 {
            AchievementBadge::Excellent
        } else if rate >= 80.0 {
            AchievementBadge::Good
        } else {
            AchievementBadge::Lagging
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AchievementBadge::Excellent => "Excellent",
            AchievementBadge::Good => "Good",
            AchievementBadge::Lagging => "Lagging",
        }
    }

    /// BEM modifier for the badge and progress bar
    pub fn tone(self) -> &'static str {
        match self {
            AchievementBadge::Excellent => "success",
            AchievementBadge::Good => "warning",
            AchievementBadge::Lagging => "danger",
        }
    }
}

/// Up to two upper-case initials: "nguyen van an" -> "NV"
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Progress bar width in percent, capped at 100
pub fn progress_width(rate: f64) -> f64 {
    rate.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, semester: u8, rate: f64) -> SalesPerformance {
        SalesPerformance {
            name: name.to_string(),
            semester,
            rate,
            ..Default::default()
        }
    }

    fn names(rows: &[SalesPerformance]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_default_filter_sorts_by_rate_desc() {
        let rows = vec![row("An", 1, 75.0), row("Binh", 1, 110.0), row("Chi", 2, 90.0)];
        let result = PerformanceFilter::default().apply(&rows);
        assert_eq!(names(&result), vec!["Binh", "Chi", "An"]);
    }

    #[test]
    fn test_search_and_semester() {
        let rows = vec![
            row("Nguyen An", 1, 75.0),
            row("Nguyen Binh", 2, 110.0),
            row("Tran Chi", 1, 90.0),
        ];
        let filter = PerformanceFilter {
            search: "NGUYEN".into(),
            semester: Some(1),
            order: SortOrder::Asc,
        };
        assert_eq!(names(&filter.apply(&rows)), vec!["Nguyen An"]);

        let filter = PerformanceFilter {
            search: "nguyen".into(),
            semester: None,
            order: SortOrder::Asc,
        };
        assert_eq!(names(&filter.apply(&rows)), vec!["Nguyen An", "Nguyen Binh"]);
    }

    #[test]
    fn test_badge_thresholds() {
        assert_eq!(AchievementBadge::from_rate(100.0), AchievementBadge::Excellent);
        assert_eq!(AchievementBadge::from_rate(80.0), AchievementBadge::Good);
        assert_eq!(AchievementBadge::from_rate(79.9), AchievementBadge::Lagging);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("nguyen van an"), "NV");
        assert_eq!(initials("Linh"), "L");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn test_progress_width_is_capped() {
        assert_eq!(progress_width(135.0), 100.0);
        assert_eq!(progress_width(42.5), 42.5);
    }

    #[test]
    fn test_sort_toggle() {
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
        assert_eq!(SortOrder::Asc.label(), "Lowest");
    }
}
