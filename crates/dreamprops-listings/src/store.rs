//! In-memory property store with filtering and pagination.
//!
//! `all` keeps fetch order. The filtered view is a list of positions into
//! `all`, so it is a subset in the same relative order by construction. Every
//! change to the filtered view resets the page index to 1.

use dreamprops_core::{PropertyRecord, TypeHint};
use tracing::debug;

use crate::pagination::PaginationView;

/// Filter currently applied to the listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveFilter {
    /// Search term as entered.
    pub search_term: String,
    /// Type restriction.
    pub type_hint: TypeHint,
}

impl ActiveFilter {
    /// Whether this filter admits every record.
    pub fn is_empty(&self) -> bool {
        self.search_term.trim().is_empty() && self.type_hint == TypeHint::Unspecified
    }

    /// Trimmed, lower-cased search term.
    fn needle(&self) -> String {
        self.search_term.trim().to_lowercase()
    }

    fn admits(&self, needle: &str, record: &PropertyRecord) -> bool {
        record.matches_search(needle) && self.type_hint.admits(record.listing_type())
    }
}

/// Full result set plus the filtered, paginated view over it.
#[derive(Debug)]
pub struct PropertyStore {
    all: Vec<PropertyRecord>,
    filtered: Vec<usize>,
    filter: ActiveFilter,
    page_index: usize,
    page_size: usize,
}

impl PropertyStore {
    /// Create an empty store with a fixed page size (at least 1).
    pub fn new(page_size: usize) -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            filter: ActiveFilter::default(),
            page_index: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replace the full result set and reset the view.
    pub fn load(&mut self, records: Vec<PropertyRecord>) {
        debug!(count = records.len(), "loading property store");
        self.all = records;
        self.filter = ActiveFilter::default();
        self.reset_view();
    }

    /// Recompute the filtered view from `all`.
    pub fn apply_filter(&mut self, search_term: &str, type_hint: TypeHint) {
        self.filter = ActiveFilter {
            search_term: search_term.to_string(),
            type_hint,
        };
        let needle = self.filter.needle();
        self.filtered = self
            .all
            .iter()
            .enumerate()
            .filter(|(_, record)| self.filter.admits(&needle, record))
            .map(|(i, _)| i)
            .collect();
        self.page_index = 1;
        debug!(
            term = search_term,
            hint = ?type_hint,
            matched = self.filtered.len(),
            "applied listing filter"
        );
    }

    /// Drop the active filter.
    pub fn clear_filter(&mut self) {
        self.filter = ActiveFilter::default();
        self.reset_view();
    }

    /// Records of the current page.
    pub fn page(&self) -> Vec<&PropertyRecord> {
        let start = (self.page_index - 1) * self.page_size;
        self.filtered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&i| &self.all[i])
            .collect()
    }

    /// Move to page `n`. Out-of-range requests are ignored.
    ///
    /// Returns whether the page index changed.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        if n < 1 || n > self.page_count() || n == self.page_index {
            return false;
        }
        self.page_index = n;
        true
    }

    /// Number of pages, 0 when nothing matches.
    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    /// The first `count` records in fetch order, ignoring the filter.
    pub fn featured(&self, count: usize) -> &[PropertyRecord] {
        &self.all[..count.min(self.all.len())]
    }

    /// Up to `count` records of the given type, in fetch order.
    pub fn by_type(&self, type_hint: TypeHint, count: usize) -> Vec<&PropertyRecord> {
        self.all
            .iter()
            .filter(|record| type_hint.admits(record.listing_type()))
            .take(count)
            .collect()
    }

    /// Pagination bar for the current view.
    pub fn pagination(&self) -> Option<PaginationView> {
        PaginationView::build(self.page_index, self.page_count())
    }

    /// Every loaded record, in fetch order.
    pub fn all(&self) -> &[PropertyRecord] {
        &self.all
    }

    /// Records in the filtered view, in fetch order.
    pub fn filtered(&self) -> impl Iterator<Item = &PropertyRecord> {
        self.filtered.iter().map(|&i| &self.all[i])
    }

    /// Size of the filtered view.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Currently applied filter.
    pub fn active_filter(&self) -> &ActiveFilter {
        &self.filter
    }

    /// Current 1-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether nothing has been loaded.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    fn reset_view(&mut self) {
        self.filtered = (0..self.all.len()).collect();
        self.page_index = 1;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
