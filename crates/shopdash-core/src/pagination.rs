//! Page bookkeeping. Holds no fetch logic — the controller decides when
//! to load; this module only answers "which page" and "which affordances".

use serde::{Deserialize, Serialize};

// ── PageMetadata ────────────────────────────────────────────────────

/// Snapshot of the server's pagination block for the current page.
///
/// Affordances are re-derived from the invariant (`has_next ⇔ page <
/// total_pages`, `has_prev ⇔ page > 1`) rather than trusted off the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMetadata {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Pagination controls are hidden for single-page (or empty) datasets.
    pub fn controls_visible(&self) -> bool {
        self.total_pages > 1
    }
}

impl From<shopdash_api::types::Pagination> for PageMetadata {
    fn from(raw: shopdash_api::types::Pagination) -> Self {
        Self::new(raw.page, raw.total_pages)
    }
}

// ── PaginationState ─────────────────────────────────────────────────

/// Tracks the current page and the last-known server metadata.
#[derive(Debug, Clone)]
pub struct PaginationState {
    page: u32,
    meta: Option<PageMetadata>,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationState {
    pub fn new() -> Self {
        Self { page: 1, meta: None }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn metadata(&self) -> Option<PageMetadata> {
        self.meta
    }

    /// The page a relative navigation lands on, clamped to `[1,
    /// total_pages]` once the total is known (and to `>= 1` before that).
    pub fn target_page(&self, delta: i32) -> u32 {
        let mut target = i64::from(self.page) + i64::from(delta);
        if target < 1 {
            target = 1;
        }
        if let Some(meta) = self.meta {
            if meta.total_pages > 0 {
                target = target.min(i64::from(meta.total_pages));
            }
        }
        u32::try_from(target).unwrap_or(1)
    }

    /// Record the metadata of a successful fetch; the current page and
    /// both affordances follow it.
    pub fn apply(&mut self, meta: PageMetadata) {
        self.page = meta.page.max(1);
        self.meta = Some(meta);
    }

    pub fn has_next(&self) -> bool {
        self.meta.is_some_and(|m| m.has_next)
    }

    pub fn has_prev(&self) -> bool {
        self.meta.is_some_and(|m| m.has_prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_hides_controls() {
        let meta = PageMetadata::new(1, 1);
        assert!(!meta.controls_visible());
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn affordances_follow_the_invariant() {
        let first = PageMetadata::new(1, 5);
        assert!(first.has_next);
        assert!(!first.has_prev);

        let middle = PageMetadata::new(3, 5);
        assert!(middle.has_next);
        assert!(middle.has_prev);

        let last = PageMetadata::new(5, 5);
        assert!(!last.has_next);
        assert!(last.has_prev);
    }

    #[test]
    fn wire_flags_are_rederived() {
        // Server claims has_next on the last page; the invariant wins.
        let raw: shopdash_api::types::Pagination = serde_json::from_value(serde_json::json!({
            "page": 5,
            "per_page": 12,
            "total_pages": 5,
            "has_next": true,
            "has_prev": true
        }))
        .expect("pagination should parse");

        let meta = PageMetadata::from(raw);
        assert!(!meta.has_next);
        assert!(meta.has_prev);
    }

    #[test]
    fn target_page_clamps_below_one() {
        let state = PaginationState::new();
        assert_eq!(state.target_page(-3), 1);
    }

    #[test]
    fn target_page_clamps_to_total_once_known() {
        let mut state = PaginationState::new();
        state.apply(PageMetadata::new(4, 5));
        assert_eq!(state.target_page(1), 5);
        assert_eq!(state.target_page(10), 5);
        assert_eq!(state.target_page(-10), 1);
    }

    #[test]
    fn target_page_is_unbounded_above_before_first_fetch() {
        let state = PaginationState::new();
        assert_eq!(state.target_page(7), 8);
    }

    #[test]
    fn empty_dataset_has_no_affordances() {
        let mut state = PaginationState::new();
        state.apply(PageMetadata::new(1, 0));
        assert!(!state.has_next());
        assert!(!state.has_prev());
        assert!(!state.metadata().expect("metadata").controls_visible());
    }
}
