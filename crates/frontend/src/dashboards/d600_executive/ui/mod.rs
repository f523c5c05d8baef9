pub mod dashboard;
pub mod sales_performance;

pub use dashboard::ExecutiveDashboard;
pub use sales_performance::SalesPerformanceWidget;
