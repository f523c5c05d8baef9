pub mod badge;
pub mod card_animated;
pub mod empty_state;
pub mod page_header;
pub mod stat_card;
pub mod table_totals_row;
pub mod year_selector;

pub use badge::Badge;
pub use card_animated::CardAnimated;
pub use empty_state::{EmptyState, ErrorBanner, LoadingState};
pub use page_header::PageHeader;
pub use stat_card::StatCard;
pub use table_totals_row::TableTotalsRow;
pub use year_selector::YearSelector;
