use contracts::shared::request_seq::{RequestSeq, Ticket};
use leptos::prelude::*;

/// Per-panel [`RequestSeq`] stored in the reactive owner of a component.
///
/// ```rust,ignore
/// let latest = LatestOnly::new();
/// let ticket = latest.issue();
/// spawn_local(async move {
///     let result = api::fetch().await;
///     if latest.is_current(ticket) { set_data.set(result) }
/// });
/// ```
#[derive(Clone, Copy)]
pub struct LatestOnly(StoredValue<RequestSeq>);

impl LatestOnly {
    pub fn new() -> Self {
        Self(StoredValue::new(RequestSeq::new()))
    }

    pub fn issue(&self) -> Ticket {
        self.0.try_update_value(|seq| seq.issue()).unwrap_or_default()
    }

    /// `false` also when the owning component is gone
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0
            .try_with_value(|seq| seq.is_current(ticket))
            .unwrap_or(false)
    }
}

impl Default for LatestOnly {
    fn default() -> Self {
        Self::new()
    }
}
