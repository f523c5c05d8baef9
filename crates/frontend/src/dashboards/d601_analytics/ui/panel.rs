use crate::shared::latest::LatestOnly;
use contracts::dashboards::d601_analytics::{
    DebtOverview, LeaderboardEntry, ProductMatrixPoint, SeasonalityPoint, TopDebtor,
};
use contracts::shared::request_seq::Ticket;
use contracts::shared::ApiError;
use leptos::prelude::*;

/// Datasets of the product, leaderboard and seasonality tabs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoreData {
    pub matrix: Vec<ProductMatrixPoint>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub seasonality: Vec<SeasonalityPoint>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebtData {
    pub overview: DebtOverview,
    pub top_debtors: Vec<TopDebtor>,
}

/// Data, loading flag and error of one independently fetched panel.
///
/// `data` stays `None` when the backend reported no data.
pub struct Panel<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    latest: LatestOnly,
}

impl<T: Send + Sync + 'static> Clone for Panel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Panel<T> {}

impl<T: Send + Sync + 'static> Panel<T> {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            latest: LatestOnly::new(),
        }
    }

    pub fn begin(&self) -> Ticket {
        self.loading.set(true);
        self.latest.issue()
    }

    /// Applies a response if `ticket` is still the latest one.
    /// Returns `true` when data was committed.
    pub fn finish(&self, ticket: Ticket, result: Result<Option<T>, ApiError>, what: &str) -> bool {
        if !self.latest.is_current(ticket) {
            log::debug!("dropping stale {} response", what);
            return false;
        }
        self.loading.set(false);
        match result {
            Ok(data) => {
                self.data.set(data);
                self.error.set(None);
                true
            }
            Err(e) => {
                log::error!("Error fetching {}: {}", what, e);
                self.error.set(Some(e.to_string()));
                false
            }
        }
    }

    /// Nothing committed yet and a request is out
    pub fn is_first_load(&self) -> bool {
        self.loading.get() && self.data.with(Option::is_none)
    }
}
