pub mod dto;
pub mod forecast;
pub mod sales_performance;

pub use dto::*;
pub use forecast::merge_forecast;
pub use sales_performance::{initials, AchievementBadge, PerformanceFilter, SortOrder};
