mod channel_tab;
mod credit_tab;
mod leaderboard_tab;
mod page;
mod panel;
mod product_matrix_tab;
mod seasonality_tab;

pub use page::AnalyticsPage;
