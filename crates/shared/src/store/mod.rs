use tracing::{debug, warn};

/// Events a dashboard surface feeds into its store. Every fetch is tagged
/// with the id handed out by [`DashboardStore::begin_fetch`], so a response
/// can always be matched against the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent<P> {
    Resolved { request_id: u64, page: P },
    Failed { request_id: u64, message: String },
}

/// Reducer-style holder for one dashboard view's fetch lifecycle.
///
/// Exactly one request may be in flight at a time: starting a new fetch
/// supersedes the previous one, and a resolution or failure carrying a
/// superseded request id is discarded. A failure for the live request
/// records the message but keeps the previously rendered page, so the
/// surface degrades to stale data instead of a blank screen.
#[derive(Debug)]
pub struct DashboardStore<P> {
    data: Option<P>,
    error: Option<String>,
    in_flight: Option<u64>,
    next_request_id: u64,
}

impl<P> Default for DashboardStore<P> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            in_flight: None,
            next_request_id: 0,
        }
    }
}

impl<P> DashboardStore<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a new fetch as the live one and returns its id. Any response
    /// for an earlier id is now stale.
    pub fn begin_fetch(&mut self) -> u64 {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight = Some(request_id);
        debug!("📡 Fetch {request_id} is now in flight");
        request_id
    }

    pub fn apply(&mut self, event: FetchEvent<P>) {
        match event {
            FetchEvent::Resolved { request_id, page } => {
                if self.in_flight != Some(request_id) {
                    warn!("⚠️ Discarding stale resolution for fetch {request_id}");
                    return;
                }
                self.data = Some(page);
                self.error = None;
                self.in_flight = None;
            }
            FetchEvent::Failed {
                request_id,
                message,
            } => {
                if self.in_flight != Some(request_id) {
                    warn!("⚠️ Discarding stale failure for fetch {request_id}");
                    return;
                }
                warn!("⚠️ Fetch {request_id} failed: {message}");
                self.error = Some(message);
                self.in_flight = None;
            }
        }
    }

    pub fn data(&self) -> Option<&P> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_for_the_live_request_lands() {
        let mut store = DashboardStore::new();
        let id = store.begin_fetch();
        assert!(store.is_loading());

        store.apply(FetchEvent::Resolved {
            request_id: id,
            page: vec!["order_1"],
        });

        assert_eq!(store.data(), Some(&vec!["order_1"]));
        assert!(store.error().is_none());
        assert!(!store.is_loading());
    }

    #[test]
    fn superseded_resolution_is_discarded() {
        let mut store = DashboardStore::new();
        let first = store.begin_fetch();
        let second = store.begin_fetch();

        // The newer request resolves first.
        store.apply(FetchEvent::Resolved {
            request_id: second,
            page: vec!["fresh"],
        });
        // The slow first response arrives afterwards and must not win.
        store.apply(FetchEvent::Resolved {
            request_id: first,
            page: vec!["stale"],
        });

        assert_eq!(store.data(), Some(&vec!["fresh"]));
    }

    #[test]
    fn failure_keeps_the_previous_page() {
        let mut store = DashboardStore::new();
        let first = store.begin_fetch();
        store.apply(FetchEvent::Resolved {
            request_id: first,
            page: vec!["order_1", "order_2"],
        });

        let second = store.begin_fetch();
        store.apply(FetchEvent::Failed {
            request_id: second,
            message: "provider unavailable".to_string(),
        });

        assert_eq!(store.data(), Some(&vec!["order_1", "order_2"]));
        assert_eq!(store.error(), Some("provider unavailable"));
        assert!(!store.is_loading());
    }

    #[test]
    fn stale_failure_does_not_clobber_a_fresh_result() {
        let mut store = DashboardStore::new();
        let first = store.begin_fetch();
        let second = store.begin_fetch();

        store.apply(FetchEvent::Resolved {
            request_id: second,
            page: vec!["fresh"],
        });
        store.apply(FetchEvent::Failed {
            request_id: first,
            message: "timed out".to_string(),
        });

        assert_eq!(store.data(), Some(&vec!["fresh"]));
        assert!(store.error().is_none());
    }

    #[test]
    fn successful_refetch_clears_a_recorded_error() {
        let mut store = DashboardStore::new();
        let first = store.begin_fetch();
        store.apply(FetchEvent::Failed {
            request_id: first,
            message: "provider unavailable".to_string(),
        });
        assert_eq!(store.error(), Some("provider unavailable"));

        let second = store.begin_fetch();
        store.apply(FetchEvent::Resolved {
            request_id: second,
            page: vec!["recovered"],
        });

        assert_eq!(store.data(), Some(&vec!["recovered"]));
        assert!(store.error().is_none());
    }
}
