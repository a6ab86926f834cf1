use contracts::domain::common::{Listing, Resource};

use super::sequence::{RequestSequence, Ticket};
use crate::shared::api::{ApiError, Filters};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Result of handing a response to the list
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    Applied,
    Failed(ApiError),
    /// A newer fetch was started, or the owner went away.
    Superseded,
}

/// Rows, stats and request bookkeeping of one list.
///
/// `idle -> loading -> loaded | errored`. A failed fetch keeps the last
/// loaded rows and stats.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R: Resource> {
    sequence: RequestSequence,
    phase: LoadPhase,
    listing: Listing<R>,
    filters: Filters,
    stale: bool,
}

impl<R: Resource> Default for ListState<R> {
    fn default() -> Self {
        Self::new(Filters::new())
    }
}

impl<R: Resource> ListState<R> {
    pub fn new(filters: Filters) -> Self {
        Self {
            sequence: RequestSequence::default(),
            phase: LoadPhase::Idle,
            listing: Listing::default(),
            filters,
            stale: false,
        }
    }

    /// Starts a fetch, optionally replacing the filters.
    ///
    /// Returns `None` once the list is closed.
    pub fn begin(&mut self, filters: Option<Filters>) -> Option<(Ticket, Filters)> {
        if self.sequence.is_closed() {
            return None;
        }
        if let Some(filters) = filters {
            self.filters = filters;
        }
        self.phase = LoadPhase::Loading;
        self.stale = false;
        Some((self.sequence.issue(), self.filters.clone()))
    }

    pub fn settle(&mut self, ticket: Ticket, result: Result<Listing<R>, ApiError>) -> Settled {
        if !self.sequence.is_current(ticket) {
            return Settled::Superseded;
        }
        match result {
            Ok(listing) => {
                self.listing = listing;
                self.phase = LoadPhase::Loaded;
                Settled::Applied
            }
            Err(err) => {
                self.phase = LoadPhase::Errored;
                Settled::Failed(err)
            }
        }
    }

    /// The next time this list is shown it must be fetched again.
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    pub fn needs_load(&self) -> bool {
        self.phase == LoadPhase::Idle || self.stale
    }

    /// Drops every in-flight response; the list will not load again.
    pub fn close(&mut self) {
        self.sequence.close();
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn items(&self) -> &[R] {
        &self.listing.items
    }

    pub fn stats(&self) -> &R::Stats {
        &self.listing.stats
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::filter;
    use contracts::domain::a006_customer::aggregate::{Customer, CustomerCounts};

    fn customer(slug: &str, kind: &str) -> Customer {
        serde_json::from_value(serde_json::json!({
            "id": slug, "slug": slug, "name": slug, "mobile": "1",
            "type": {"id": kind, "name": kind}
        }))
        .unwrap()
    }

    fn listing(items: Vec<Customer>) -> Listing<Customer> {
        let total = items.len() as u64;
        Listing {
            items,
            stats: CustomerCounts {
                total,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_later_response_wins_regardless_of_arrival_order() {
        let mut state = ListState::<Customer>::new(filter("type", "enterprise"));
        let (first, _) = state.begin(None).unwrap();
        let (second, filters) = state.begin(Some(filter("type", "individual"))).unwrap();
        assert_eq!(filters, filter("type", "individual"));

        let individual = listing(vec![customer("ravi", "individual")]);
        assert_eq!(state.settle(second, Ok(individual.clone())), Settled::Applied);

        let enterprise = listing(vec![customer("acme", "enterprise"), customer("zen", "enterprise")]);
        assert_eq!(state.settle(first, Ok(enterprise)), Settled::Superseded);

        assert_eq!(state.items(), individual.items.as_slice());
        assert_eq!(state.stats().total, 1);
        assert_eq!(state.phase(), LoadPhase::Loaded);
    }

    #[test]
    fn test_error_keeps_previous_rows_and_stats() {
        let mut state = ListState::<Customer>::default();
        let (t1, _) = state.begin(None).unwrap();
        state.settle(t1, Ok(listing(vec![customer("acme", "enterprise")])));

        let (t2, _) = state.begin(None).unwrap();
        let err = ApiError::Network("Failed to fetch customers".to_string());
        assert_eq!(state.settle(t2, Err(err.clone())), Settled::Failed(err));

        assert_eq!(state.phase(), LoadPhase::Errored);
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.stats().total, 1);
    }

    #[test]
    fn test_closed_list_ignores_in_flight_response() {
        let mut state = ListState::<Customer>::default();
        let (ticket, _) = state.begin(None).unwrap();
        state.close();

        let result = state.settle(ticket, Ok(listing(vec![customer("acme", "enterprise")])));
        assert_eq!(result, Settled::Superseded);
        assert!(state.items().is_empty());
        assert!(state.begin(None).is_none());
    }

    #[test]
    fn test_stale_flag_is_cleared_by_next_fetch() {
        let mut state = ListState::<Customer>::default();
        assert!(state.needs_load());

        let (ticket, _) = state.begin(None).unwrap();
        state.settle(ticket, Ok(listing(Vec::new())));
        assert!(!state.needs_load());

        state.mark_stale();
        assert!(state.needs_load());
        state.begin(None);
        assert!(!state.needs_load());
    }
}
