//! Page-button model for the full listing.

use serde::Serialize;

/// Pages shown on either side of the current page.
pub const WINDOW_RADIUS: usize = 2;

/// What the pagination bar should show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationView {
    /// Current 1-based page.
    pub current: usize,
    /// Total page count.
    pub total: usize,
    /// Whether "Previous" is enabled.
    pub has_previous: bool,
    /// Whether "Next" is enabled.
    pub has_next: bool,
    /// Page numbers to render as buttons.
    pub pages: Vec<usize>,
}

impl PaginationView {
    /// Build the bar for `current` of `total`, or `None` when there is at
    /// most one page.
    pub fn build(current: usize, total: usize) -> Option<Self> {
        if total <= 1 {
            return None;
        }
        let current = current.clamp(1, total);
        let first = current.saturating_sub(WINDOW_RADIUS).max(1);
        let last = (current + WINDOW_RADIUS).min(total);
        Some(Self {
            current,
            total,
            has_previous: current > 1,
            has_next: current < total,
            pages: (first..=last).collect(),
        })
    }
}
