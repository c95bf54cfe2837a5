//! Out-of-order replies on list pages
//!
//! A page that refetches on every filter or page change may get replies in
//! another order than it sent the requests. Only the reply to the newest
//! request is applied; replies arriving after the page unmounted are dropped.

use leptos::prelude::*;

/// Request numbering; the last issued number is the only current one
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tickets {
    last: u64,
}

impl Tickets {
    pub fn issue(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.last
    }
}

/// [`Tickets`] owned by a page; disposed together with it
#[derive(Clone, Copy)]
pub struct LatestRequest {
    tickets: StoredValue<Tickets>,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self {
            tickets: StoredValue::new(Tickets::default()),
        }
    }

    /// Number for a request about to be sent
    pub fn begin(&self) -> u64 {
        self.tickets.try_update_value(|t| t.issue()).unwrap_or_default()
    }

    /// False for a superseded request or an unmounted page
    pub fn is_current(&self, ticket: u64) -> bool {
        self.tickets
            .try_with_value(|t| t.is_latest(ticket))
            .unwrap_or(false)
    }
}

impl Default for LatestRequest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{LatestRequest, Tickets};

    #[test]
    fn older_reply_is_stale_once_a_newer_request_went_out() {
        let mut tickets = Tickets::default();
        let vehicles = tickets.issue();
        let services = tickets.issue();
        // services answers first, vehicles last
        assert!(tickets.is_latest(services));
        assert!(!tickets.is_latest(vehicles));
    }

    #[test]
    fn nothing_is_current_before_the_first_request() {
        let tickets = Tickets::default();
        assert!(!tickets.is_latest(1));
    }

    #[test]
    fn page_guard_applies_only_the_newest_reply() {
        let latest = LatestRequest::new();
        let first = latest.begin();
        let second = latest.begin();
        assert_ne!(first, second);
        assert!(latest.is_current(second));
        assert!(!latest.is_current(first));
    }
}
