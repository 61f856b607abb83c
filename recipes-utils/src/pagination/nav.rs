//! Pager state snapshots and the page-change events they accept.

use super::window::{PageWindow, compute_page_window};

/// A navigation request coming from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Previous,
    Next,
    /// A numeric marker was activated.
    Select(usize),
}

/// Accepted move from one page to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub from: usize,
    pub to: usize,
}

/// Read-only view of the caller's pagination state.
///
/// The caller owns the current page. `Pager` only decides whether a
/// request is allowed and where it leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    total_pages: usize,
}

impl Pager {
    /// Build a pager, clamping `current_page` into `[1, total_pages]`.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page: super::clamp_page(current_page, total_pages),
            total_pages,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Markers to display for the current state.
    pub fn window(&self) -> PageWindow {
        compute_page_window(self.current_page, self.total_pages)
    }

    pub fn has_previous(&self) -> bool {
        self.total_pages > 0 && self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Resolve a request against the current state.
    ///
    /// Returns `None` when the request is disabled: stepping past either
    /// boundary, selecting a page that is not shown, or selecting the
    /// current page.
    pub fn resolve(&self, request: PageRequest) -> Option<PageChange> {
        let to = match request {
            PageRequest::Previous => self.has_previous().then(|| self.current_page - 1)?,
            PageRequest::Next => self.has_next().then(|| self.current_page + 1)?,
            PageRequest::Select(page) => {
                if page == self.current_page || !self.window().contains_page(page) {
                    return None;
                }
                page
            }
        };

        Some(PageChange {
            from: self.current_page,
            to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_affordances_disable_at_boundaries() {
        let first = Pager::new(1, 10);
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert_eq!(first.resolve(PageRequest::Previous), None);
        assert_eq!(
            first.resolve(PageRequest::Next),
            Some(PageChange { from: 1, to: 2 })
        );

        let last = Pager::new(10, 10);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.resolve(PageRequest::Next), None);
        assert_eq!(
            last.resolve(PageRequest::Previous),
            Some(PageChange { from: 10, to: 9 })
        );
    }

    #[test]
    fn empty_pager_rejects_everything() {
        let pager = Pager::new(1, 0);
        assert!(pager.window().is_empty());
        assert!(!pager.has_previous());
        assert!(!pager.has_next());
        assert_eq!(pager.resolve(PageRequest::Select(1)), None);
    }

    #[test]
    fn select_only_accepts_visible_pages() {
        let pager = Pager::new(5, 10);
        assert_eq!(
            pager.resolve(PageRequest::Select(10)),
            Some(PageChange { from: 5, to: 10 })
        );
        assert_eq!(
            pager.resolve(PageRequest::Select(4)),
            Some(PageChange { from: 5, to: 4 })
        );
        // Hidden behind an ellipsis.
        assert_eq!(pager.resolve(PageRequest::Select(8)), None);
        assert_eq!(pager.resolve(PageRequest::Select(5)), None);
        assert_eq!(pager.resolve(PageRequest::Select(0)), None);
    }

    #[test]
    fn new_clamps_current_page() {
        assert_eq!(Pager::new(0, 4).current_page(), 1);
        assert_eq!(Pager::new(9, 4).current_page(), 4);
    }
}
