use contracts::domain::common::{ReferenceEntity, StatusFilterMode};
use contracts::shared::pagination::{
    page_window, total_pages, PageRequest, PageResponse, PageSlot, StatusFilter,
};

/// Plain state of one list screen. Lives inside an `RwSignal`, every
/// transition is a synchronous method so it can be tested without a DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    /// 1-based
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    pub status_filter: Option<StatusFilter>,
    pub is_loaded: bool,
    /// Sequence number of the latest dispatched load
    latest_request: u64,
}

/// A dispatched load: its sequence number and the request to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub request: PageRequest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load was dispatched, the response was dropped
    Stale,
    Failed,
    /// The loaded page is past the end; `current_page` was clamped to
    /// `last_page`, which has to be loaded
    OutOfRange { last_page: usize },
}

impl<T> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            page_size: page_size.max(1),
            total_items: 0,
            total_pages: 1,
            loading: false,
            error: None,
            search_term: String::new(),
            status_filter: None,
            is_loaded: false,
            latest_request: 0,
        }
    }

    /// No clamping: navigation controls are disabled out of range.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Returns `true` when the term changed; the page is then back to 1.
    pub fn set_search_term(&mut self, term: &str) -> bool {
        if self.search_term == term {
            return false;
        }
        self.search_term = term.to_string();
        self.current_page = 1;
        true
    }

    /// Returns `true` when the filter changed; the page is then back to 1.
    pub fn set_status_filter(&mut self, filter: Option<StatusFilter>) -> bool {
        if self.status_filter == filter {
            return false;
        }
        self.status_filter = filter;
        self.current_page = 1;
        true
    }

    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        let page_size = page_size.max(1);
        if self.page_size == page_size {
            return false;
        }
        self.page_size = page_size;
        self.current_page = 1;
        true
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn window(&self) -> Vec<PageSlot> {
        page_window(self.current_page, self.total_pages)
    }
}

impl<T: ReferenceEntity> ListState<T> {
    /// Marks a load of `page` as in flight and hands out its ticket.
    /// Any ticket handed out before this one becomes stale.
    pub fn begin_load(&mut self, page: usize) -> LoadTicket {
        self.latest_request += 1;
        self.current_page = page.max(1);
        self.loading = true;

        let status = match T::status_filter_mode() {
            StatusFilterMode::Server => self.status_filter,
            StatusFilterMode::Client | StatusFilterMode::Unsupported => None,
        };
        LoadTicket {
            seq: self.latest_request,
            request: PageRequest::new(self.current_page, self.page_size)
                .with_search(self.search_term.clone())
                .with_status(status),
        }
    }

    /// Applies the result of the load identified by `seq`.
    pub fn apply(&mut self, seq: u64, result: Result<PageResponse<T>, String>) -> LoadOutcome {
        if seq != self.latest_request {
            return LoadOutcome::Stale;
        }
        self.loading = false;

        let page = match result {
            Ok(page) => page,
            Err(message) => {
                self.error = Some(message);
                self.items.clear();
                return LoadOutcome::Failed;
            }
        };

        let (items, total) = match (T::status_filter_mode(), self.status_filter) {
            (StatusFilterMode::Client, Some(filter)) => {
                let items: Vec<T> = page
                    .items
                    .into_iter()
                    .filter(|item| filter.accepts(item.is_active()))
                    .collect();
                let total = items.len();
                (items, total)
            }
            _ => (page.items, page.total_items),
        };

        self.items = items;
        self.total_items = total;
        self.total_pages = total_pages(total, self.page_size);
        self.error = None;
        self.is_loaded = true;

        if self.current_page > self.total_pages {
            self.current_page = self.total_pages;
            return LoadOutcome::OutOfRange {
                last_page: self.total_pages,
            };
        }
        LoadOutcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_supplier::Supplier;
    use contracts::domain::a002_country::Country;
    use contracts::domain::a007_quality::Quality;

    fn quality(id: i64, active: bool) -> Quality {
        Quality {
            id,
            name: format!("Q{}", id),
            is_active: active,
        }
    }

    fn country(id: i64) -> Country {
        Country {
            id,
            code: "FR".into(),
            name: format!("Country {}", id),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ListState::<Country>::new(10);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 1);
        assert!(!state.can_go_prev());
        assert!(!state.can_go_next());
        assert!(!state.is_loaded);
    }

    #[test]
    fn test_empty_result() {
        let mut state = ListState::<Country>::new(10);
        let ticket = state.begin_load(1);
        assert!(state.loading);
        let outcome = state.apply(ticket.seq, Ok(PageResponse::empty()));
        assert_eq!(outcome, LoadOutcome::Applied);
        assert!(state.items.is_empty());
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_23_items_by_10() {
        let mut state = ListState::<Country>::new(10);
        let ticket = state.begin_load(3);
        let items = (21..=23).map(country).collect();
        state.apply(ticket.seq, Ok(PageResponse::new(items, 23)));
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.current_page, 3);
        assert!(state.can_go_prev());
        assert!(!state.can_go_next());
    }

    #[test]
    fn test_stale_response_dropped() {
        let mut state = ListState::<Country>::new(10);
        let first = state.begin_load(1);
        let second = state.begin_load(2);
        assert!(second.seq > first.seq);

        // page 2 resolves first, page 1 arrives late
        let outcome = state.apply(second.seq, Ok(PageResponse::new(vec![country(11)], 15)));
        assert_eq!(outcome, LoadOutcome::Applied);
        let outcome = state.apply(first.seq, Ok(PageResponse::new(vec![country(1)], 15)));
        assert_eq!(outcome, LoadOutcome::Stale);

        assert_eq!(state.current_page, 2);
        assert_eq!(state.items, vec![country(11)]);
    }

    #[test]
    fn test_stale_response_keeps_loading_flag() {
        let mut state = ListState::<Country>::new(10);
        let first = state.begin_load(1);
        let _second = state.begin_load(2);
        state.apply(first.seq, Err("boom".into()));
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failure_clears_items() {
        let mut state = ListState::<Country>::new(10);
        let ticket = state.begin_load(1);
        state.apply(ticket.seq, Ok(PageResponse::new(vec![country(1)], 1)));

        let ticket = state.begin_load(1);
        let outcome = state.apply(ticket.seq, Err("Failed to load data".into()));
        assert_eq!(outcome, LoadOutcome::Failed);
        assert!(state.items.is_empty());
        assert_eq!(state.error.as_deref(), Some("Failed to load data"));

        let ticket = state.begin_load(1);
        state.apply(ticket.seq, Ok(PageResponse::new(vec![country(1)], 1)));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_filter_change_resets_page_once() {
        let mut state = ListState::<Supplier>::new(10);
        state.set_page(4);
        assert!(state.set_search_term("acme"));
        assert_eq!(state.current_page, 1);

        state.set_page(2);
        assert!(!state.set_search_term("acme"));
        assert_eq!(state.current_page, 2);

        assert!(state.set_status_filter(Some(StatusFilter::Inactive)));
        assert_eq!(state.current_page, 1);
        assert!(!state.set_status_filter(Some(StatusFilter::Inactive)));
    }

    #[test]
    fn test_server_status_goes_into_request() {
        let mut state = ListState::<Supplier>::new(20);
        state.set_search_term("nordic");
        state.set_status_filter(Some(StatusFilter::Active));
        let ticket = state.begin_load(1);
        assert_eq!(ticket.request.page_size, 20);
        assert_eq!(ticket.request.search_term, "nordic");
        assert_eq!(ticket.request.status_filter, Some(StatusFilter::Active));
    }

    #[test]
    fn test_client_status_filter_recomputes_total() {
        let mut state = ListState::<Quality>::new(10);
        state.set_status_filter(Some(StatusFilter::Active));
        let ticket = state.begin_load(1);
        assert_eq!(ticket.request.status_filter, None);

        let items: Vec<Quality> = (1..=10).map(|id| quality(id, id <= 6)).collect();
        state.apply(ticket.seq, Ok(PageResponse::new(items, 42)));
        assert_eq!(state.items.len(), 6);
        assert_eq!(state.total_items, 6);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn test_client_status_unset_keeps_server_total() {
        let mut state = ListState::<Quality>::new(10);
        let ticket = state.begin_load(1);
        let items: Vec<Quality> = (1..=10).map(|id| quality(id, id % 2 == 0)).collect();
        state.apply(ticket.seq, Ok(PageResponse::new(items, 42)));
        assert_eq!(state.items.len(), 10);
        assert_eq!(state.total_pages, 5);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let mut state = ListState::<Country>::new(10);
        let ticket = state.begin_load(3);
        // last row of page 3 was deleted elsewhere
        let outcome = state.apply(ticket.seq, Ok(PageResponse::new(Vec::new(), 20)));
        assert_eq!(outcome, LoadOutcome::OutOfRange { last_page: 2 });
        assert_eq!(state.current_page, 2);
        assert_eq!(state.total_pages, 2);
    }

    #[test]
    fn test_page_size_change() {
        let mut state = ListState::<Country>::new(10);
        state.set_page(3);
        assert!(state.set_page_size(50));
        assert_eq!(state.current_page, 1);
        assert!(!state.set_page_size(50));
        assert!(state.set_page_size(0));
        assert_eq!(state.page_size, 1);
    }
}
