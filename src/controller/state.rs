use crate::api::models::{SortDir, SortField};

/// Request state for the listing page. One instance per page session,
/// mutated only through these transitions, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
    pub sort_field: SortField,
    pub sort_dir: SortDir,
    pub loading: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    pub fn new() -> PageState {
        PageState {
            current_page: 1,
            total_pages: 1,
            sort_field: SortField::Date,
            sort_dir: SortDir::Desc,
            loading: false,
        }
    }

    /// A pagination click only fires for a reachable page that is not the
    /// one already shown, and never while a request is in flight.
    pub fn can_click(&self, page: u32) -> bool {
        !self.loading && page >= 1 && page <= self.total_pages && page != self.current_page
    }

    /// `Idle -> Loading`. Returns false when a request is already in
    /// flight; the caller drops the trigger silently (no queueing, no
    /// cancellation of the in-flight request).
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// `Loading -> Idle` after a successful response. `current_page` is
    /// clamped so it never exceeds `total_pages`.
    pub fn finish_load(&mut self, requested_page: u32, total_pages: u32) {
        self.total_pages = total_pages.max(1);
        self.current_page = requested_page.clamp(1, self.total_pages);
        self.loading = false;
    }

    /// `Loading -> Idle` after a failure. Everything else stays as it was.
    pub fn fail_load(&mut self) {
        self.loading = false;
    }

    /// Applies a debounced sort change. The view resets to page 1 so the
    /// user sees the top of the re-ordered listing.
    pub fn apply_sort(&mut self, field: SortField, dir: SortDir) {
        self.sort_field = field;
        self.sort_dir = dir;
        self.current_page = 1;
    }
}
