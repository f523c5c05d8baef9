pub mod aggregates;
pub mod dto;
pub mod product_matrix;
pub mod view_state;

pub use aggregates::{
    aging_color, ordered_divisions, ordered_overview, percent_of, ChannelTotals, DebtTotals,
    AGING_COLORS,
};
pub use dto::*;
pub use product_matrix::{leaderboard_height, MarginBucket, MatrixReference};
pub use view_state::{AnalyticsTab, AnalyticsViewState, FetchPlan};
