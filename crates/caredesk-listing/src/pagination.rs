//! Caller-owned pagination state.
//!
//! The table component renders previous/next controls from this state but
//! never mutates it: activating a control emits the clamped target page and
//! the page that owns the cursor applies it.

/// Pagination cursor: a 1-based current page within `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::single_page()
    }
}

impl PaginationState {
    /// A single-page state (controls hidden).
    pub fn single_page() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }

    /// Build a state, clamping both fields to at least 1 and the current
    /// page into `[1, total_pages]`.
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
        }
    }

    /// Build a state for `len` rows split into pages of `page_size`.
    ///
    /// A zero `page_size` or an empty dataset yields a single page.
    pub fn for_len(current_page: u32, len: usize, page_size: usize) -> Self {
        if page_size == 0 {
            return Self::new(current_page, 1);
        }
        let total = len.div_ceil(page_size).max(1);
        Self::new(current_page, u32::try_from(total).unwrap_or(u32::MAX))
    }

    /// Current page, 1-based.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Total pages, at least 1.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Controls are only rendered when there is more than one page.
    pub fn has_controls(&self) -> bool {
        self.total_pages > 1
    }

    /// Target page for the previous control, or `None` at page 1.
    pub fn previous(&self) -> Option<u32> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    /// Target page for the next control, or `None` at the last page.
    pub fn next(&self) -> Option<u32> {
        (self.current_page < self.total_pages).then(|| self.current_page + 1)
    }

    /// Project the current page window out of `rows`.
    ///
    /// The last page may be a partial window; a window past the end of the
    /// slice yields the empty slice.
    pub fn page_slice<'a, T>(&self, rows: &'a [T], page_size: usize) -> &'a [T] {
        if page_size == 0 {
            return rows;
        }
        let start = (self.current_page as usize - 1).saturating_mul(page_size);
        if start >= rows.len() {
            return &[];
        }
        let end = (start + page_size).min(rows.len());
        &rows[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_clamps_into_range() {
        let state = PaginationState::new(9, 3);
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.total_pages(), 3);

        let state = PaginationState::new(0, 0);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn boundary_controls_are_noops() {
        let first = PaginationState::new(1, 3);
        assert_eq!(first.previous(), None);
        assert_eq!(first.next(), Some(2));

        let last = PaginationState::new(3, 3);
        assert_eq!(last.next(), None);
        assert_eq!(last.previous(), Some(2));
    }

    #[test]
    fn controls_hidden_for_single_page() {
        assert!(!PaginationState::new(1, 1).has_controls());
        assert!(PaginationState::new(1, 2).has_controls());
    }

    #[test]
    fn for_len_rounds_up() {
        assert_eq!(PaginationState::for_len(1, 21, 10).total_pages(), 3);
        assert_eq!(PaginationState::for_len(1, 20, 10).total_pages(), 2);
        assert_eq!(PaginationState::for_len(1, 0, 10).total_pages(), 1);
    }

    #[test]
    fn page_slice_returns_partial_tail() {
        let rows: Vec<u32> = (0..25).collect();
        let last = PaginationState::for_len(3, rows.len(), 10);
        assert_eq!(last.page_slice(&rows, 10), &[20, 21, 22, 23, 24]);

        let past_end = PaginationState::new(4, 4);
        assert_eq!(past_end.page_slice(&rows[..5], 10), &[] as &[u32]);
    }
}
