//! Which analytics tab is visible and which datasets it still needs

use serde::{Deserialize, Serialize};

use super::dto::{AnalyticsQuery, DebtQuery};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsTab {
    #[default]
    Products,
    Leaderboard,
    Seasonality,
    Channel,
    Credit,
}

impl AnalyticsTab {
    pub const ALL: [AnalyticsTab; 5] = [
        AnalyticsTab::Products,
        AnalyticsTab::Leaderboard,
        AnalyticsTab::Seasonality,
        AnalyticsTab::Channel,
        AnalyticsTab::Credit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnalyticsTab::Products => "Product Matrix",
            AnalyticsTab::Leaderboard => "Leaderboard",
            AnalyticsTab::Seasonality => "Seasonality",
            AnalyticsTab::Channel => "Channel Profitability",
            AnalyticsTab::Credit => "Debt & Collections",
        }
    }

    /// The product matrix, leaderboard and seasonality tabs share one dataset
    pub fn needs_core(self) -> bool {
        matches!(
            self,
            AnalyticsTab::Products | AnalyticsTab::Leaderboard | AnalyticsTab::Seasonality
        )
    }
}

/// A request the page has to issue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FetchPlan {
    /// product matrix + leaderboard + seasonality, fetched together
    Core(AnalyticsQuery),
    Channel(AnalyticsQuery),
    /// overview + top customers, fetched together
    Debt(DebtQuery),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsViewState {
    pub active_tab: AnalyticsTab,
    pub year: i32,
    pub semester: Option<u8>,
    pub selected_debt_date: Option<String>,
    loaded_core: Option<AnalyticsQuery>,
    loaded_channel: Option<AnalyticsQuery>,
    loaded_debt: Option<DebtQuery>,
}

impl AnalyticsViewState {
    pub fn new(year: i32) -> Self {
        Self {
            active_tab: AnalyticsTab::default(),
            year,
            semester: None,
            selected_debt_date: None,
            loaded_core: None,
            loaded_channel: None,
            loaded_debt: None,
        }
    }

    pub fn query(&self) -> AnalyticsQuery {
        AnalyticsQuery {
            year: self.year,
            semester: self.semester,
        }
    }

    pub fn debt_query(&self) -> DebtQuery {
        DebtQuery {
            report_date: self.selected_debt_date.clone(),
        }
    }

    /// Fetches needed for the state as it stands (first render)
    pub fn initial_fetches(&self) -> Vec<FetchPlan> {
        self.pending()
    }

    pub fn select_tab(&mut self, tab: AnalyticsTab) -> Vec<FetchPlan> {
        self.active_tab = tab;
        self.pending()
    }

    pub fn set_year(&mut self, year: i32) -> Vec<FetchPlan> {
        self.year = year;
        self.pending()
    }

    pub fn set_semester(&mut self, semester: Option<u8>) -> Vec<FetchPlan> {
        self.semester = semester;
        self.pending()
    }

    pub fn set_debt_date(&mut self, date: Option<String>) -> Vec<FetchPlan> {
        self.selected_debt_date = date;
        self.pending()
    }

    /// Records a successful load. Plans for a filter context that has
    /// since moved on are still recorded, they just never match again.
    pub fn mark_loaded(&mut self, plan: &FetchPlan) {
        match plan {
            FetchPlan::Core(q) => self.loaded_core = Some(*q),
            FetchPlan::Channel(q) => self.loaded_channel = Some(*q),
            FetchPlan::Debt(q) => self.loaded_debt = Some(q.clone()),
        }
    }

    /// Takes over the report date returned by the debt overview when the
    /// user has not picked one. The dataset loaded without a date counts as
    /// loaded for the adopted date.
    pub fn adopt_report_date(&mut self, date: &str) {
        if self.selected_debt_date.is_some() {
            return;
        }
        self.selected_debt_date = Some(date.to_string());
        if self.loaded_debt == Some(DebtQuery::default()) {
            self.loaded_debt = Some(self.debt_query());
        }
    }

    pub fn is_core_loaded(&self) -> bool {
        self.loaded_core == Some(self.query())
    }

    pub fn is_channel_loaded(&self) -> bool {
        self.loaded_channel == Some(self.query())
    }

    pub fn is_debt_loaded(&self) -> bool {
        self.loaded_debt.as_ref() == Some(&self.debt_query())
    }

    fn pending(&self) -> Vec<FetchPlan> {
        let mut plans = Vec::new();
        match self.active_tab {
            tab if tab.needs_core() => {
                if !self.is_core_loaded() {
                    plans.push(FetchPlan::Core(self.query()));
                }
            }
            AnalyticsTab::Channel => {
                if !self.is_channel_loaded() {
                    plans.push(FetchPlan::Channel(self.query()));
                }
            }
            _ => {
                if !self.is_debt_loaded() {
                    plans.push(FetchPlan::Debt(self.debt_query()));
                }
            }
        }
        plans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(state: &mut AnalyticsViewState, plans: &[FetchPlan]) {
        for plan in plans {
            state.mark_loaded(plan);
        }
    }

    #[test]
    fn test_initial_fetch_is_core_for_the_year() {
        let state = AnalyticsViewState::new(2025);
        assert_eq!(state.active_tab, AnalyticsTab::Products);
        assert_eq!(
            state.initial_fetches(),
            vec![FetchPlan::Core(AnalyticsQuery {
                year: 2025,
                semester: None
            })]
        );
    }

    #[test]
    fn test_core_tabs_share_one_dataset() {
        let mut state = AnalyticsViewState::new(2025);
        let plans = state.initial_fetches();
        loaded(&mut state, &plans);

        assert!(state.select_tab(AnalyticsTab::Leaderboard).is_empty());
        assert!(state.select_tab(AnalyticsTab::Seasonality).is_empty());
        assert!(state.select_tab(AnalyticsTab::Products).is_empty());
    }

    #[test]
    fn test_products_to_credit_fetches_debt_once() {
        let mut state = AnalyticsViewState::new(2025);
        let plans = state.initial_fetches();
        loaded(&mut state, &plans);

        let plans = state.select_tab(AnalyticsTab::Credit);
        assert_eq!(plans, vec![FetchPlan::Debt(DebtQuery { report_date: None })]);
        loaded(&mut state, &plans);

        state.adopt_report_date("2025-06-30");
        assert_eq!(state.selected_debt_date.as_deref(), Some("2025-06-30"));
        assert!(state.is_debt_loaded());

        // leaving and coming back does not refetch
        assert!(state.select_tab(AnalyticsTab::Products).is_empty());
        assert!(state.select_tab(AnalyticsTab::Credit).is_empty());
    }

    #[test]
    fn test_adopt_keeps_user_choice() {
        let mut state = AnalyticsViewState::new(2025);
        state.select_tab(AnalyticsTab::Credit);
        state.set_debt_date(Some("2025-03-31".into()));
        state.adopt_report_date("2025-06-30");
        assert_eq!(state.selected_debt_date.as_deref(), Some("2025-03-31"));
    }

    #[test]
    fn test_changing_debt_date_refetches_on_credit_tab() {
        let mut state = AnalyticsViewState::new(2025);
        let plans = state.select_tab(AnalyticsTab::Credit);
        loaded(&mut state, &plans);
        state.adopt_report_date("2025-06-30");

        let plans = state.set_debt_date(Some("2025-05-31".into()));
        assert_eq!(
            plans,
            vec![FetchPlan::Debt(DebtQuery {
                report_date: Some("2025-05-31".into())
            })]
        );
    }

    #[test]
    fn test_failed_debt_date_can_be_changed_again() {
        let mut state = AnalyticsViewState::new(2025);
        let plans = state.select_tab(AnalyticsTab::Credit);
        loaded(&mut state, &plans);
        state.adopt_report_date("2025-06-30");

        // the fetch for this date fails, so it is never marked loaded
        let failed = state.set_debt_date(Some("2024-01-31".into()));
        assert_eq!(failed.len(), 1);
        assert_eq!(state.selected_debt_date.as_deref(), Some("2024-01-31"));

        let plans = state.set_debt_date(Some("2025-05-31".into()));
        assert_eq!(
            plans,
            vec![FetchPlan::Debt(DebtQuery {
                report_date: Some("2025-05-31".into())
            })]
        );
    }

    #[test]
    fn test_channel_tab_follows_filters() {
        let mut state = AnalyticsViewState::new(2025);
        let plans = state.select_tab(AnalyticsTab::Channel);
        assert_eq!(plans, vec![FetchPlan::Channel(state.query())]);
        loaded(&mut state, &plans);

        let plans = state.set_semester(Some(2));
        assert_eq!(
            plans,
            vec![FetchPlan::Channel(AnalyticsQuery {
                year: 2025,
                semester: Some(2)
            })]
        );
        loaded(&mut state, &plans);

        // core data is stale for the new semester once we go back
        let plans = state.select_tab(AnalyticsTab::Leaderboard);
        assert_eq!(plans.len(), 1);
        assert!(matches!(plans[0], FetchPlan::Core(q) if q.semester == Some(2)));
    }

    #[test]
    fn test_year_change_does_not_touch_debt() {
        let mut state = AnalyticsViewState::new(2025);
        let plans = state.select_tab(AnalyticsTab::Credit);
        loaded(&mut state, &plans);
        assert!(state.set_year(2024).is_empty());
    }

    #[test]
    fn test_state_roundtrips_through_json() {
        let mut state = AnalyticsViewState::new(2024);
        state.select_tab(AnalyticsTab::Seasonality);
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"active_tab\":\"seasonality\""));
        let back: AnalyticsViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
