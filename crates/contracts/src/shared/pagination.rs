//! Page request/response types and the pagination math shared by every list screen.
//!
//! Pages are 1-based throughout. `total_pages` never drops below 1 so an
//! empty list still renders as "page 1 of 1".

use serde::{Deserialize, Serialize};

/// Maximum number of numbered buttons in the pagination window.
pub const PAGE_WINDOW_SIZE: usize = 5;

/// Tri-state active/inactive filter. `None` on the request means "unset".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn as_bool(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Whether an item with the given status passes the filter.
    /// Items without a status never pass an explicit filter.
    pub fn accepts(&self, status: Option<bool>) -> bool {
        status == Some(self.as_bool())
    }

    /// Value used by `<select>` controls: "all" | "active" | "inactive".
    pub fn to_select_value(filter: Option<StatusFilter>) -> &'static str {
        match filter {
            None => "all",
            Some(Self::Active) => "active",
            Some(Self::Inactive) => "inactive",
        }
    }

    pub fn from_select_value(value: &str) -> Option<StatusFilter> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// Request for one page of an entity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
    pub search_term: String,
    pub status_filter: Option<StatusFilter>,
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
            search_term: String::new(),
            status_filter: None,
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_status(mut self, filter: Option<StatusFilter>) -> Self {
        self.status_filter = filter;
        self
    }

    /// Search term with surrounding whitespace removed; `None` when blank.
    pub fn trimmed_search(&self) -> Option<&str> {
        let term = self.search_term.trim();
        if term.is_empty() {
            None
        } else {
            Some(term)
        }
    }
}

/// One page of items plus the total item count reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total_items: usize,
}

impl<T> PageResponse<T> {
    pub fn new(items: Vec<T>, total_items: usize) -> Self {
        Self { items, total_items }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
        }
    }
}

/// `max(1, ceil(total_items / page_size))`. A zero page size is treated as 1.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_items.div_ceil(page_size).max(1)
}

/// One slot of the rendered pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Ellipsis,
}

/// Numbered window around `current_page`, inclusive on both ends.
pub fn window_bounds(current_page: usize, total_pages: usize) -> (usize, usize) {
    let total_pages = total_pages.max(1);
    let current_page = current_page.clamp(1, total_pages);

    let mut start = current_page.saturating_sub(2).max(1);
    let end = (start + PAGE_WINDOW_SIZE - 1).min(total_pages);
    if end - start + 1 < PAGE_WINDOW_SIZE {
        start = end.saturating_sub(PAGE_WINDOW_SIZE - 1).max(1);
    }
    (start, end)
}

/// Slots for the pagination bar: `1 …` before the window when it does not
/// start at page 1, `… N` after it when it does not reach the last page.
/// The ellipsis is only emitted when at least one page is actually hidden.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageSlot> {
    let total_pages = total_pages.max(1);
    let (start, end) = window_bounds(current_page, total_pages);
    let mut slots = Vec::with_capacity(PAGE_WINDOW_SIZE + 4);

    if start > 1 {
        slots.push(PageSlot::Page(1));
        if start > 2 {
            slots.push(PageSlot::Ellipsis);
        }
    }

    slots.extend((start..=end).map(PageSlot::Page));

    if end < total_pages {
        if end < total_pages - 1 {
            slots.push(PageSlot::Ellipsis);
        }
        slots.push(PageSlot::Page(total_pages));
    }

    slots
}
