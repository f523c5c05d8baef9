pub mod d600_executive;
pub mod d601_analytics;

pub use d600_executive::ui::ExecutiveDashboard;
pub use d601_analytics::ui::AnalyticsPage;
