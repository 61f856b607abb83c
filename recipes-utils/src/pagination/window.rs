//! Truncation-aware page windows for pager controls.

/// Page counts at or below this are always shown in full.
pub const FULL_RANGE_MAX_PAGES: usize = 7;

/// One slot of a pager control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    /// A selectable 1-based page.
    Number(usize),
    /// Placeholder for a collapsed run of pages. Not selectable.
    Ellipsis,
}

impl PageMarker {
    /// Page value of a numeric marker.
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Number(page) => Some(page),
            Self::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

/// Ordered, left-to-right markers for one `(current_page, total_pages)` pair.
///
/// Numeric markers strictly increase, ellipses are never adjacent, and the
/// window never starts or ends with an ellipsis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageWindow {
    markers: Vec<PageMarker>,
}

impl PageWindow {
    pub fn markers(&self) -> &[PageMarker] {
        &self.markers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageMarker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Page numbers in display order, skipping ellipses.
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.markers.iter().filter_map(|marker| marker.page())
    }

    /// Whether `page` is shown as a selectable marker.
    pub fn contains_page(&self, page: usize) -> bool {
        self.pages().any(|shown| shown == page)
    }

    pub fn is_truncated(&self) -> bool {
        self.markers.iter().any(|marker| marker.is_ellipsis())
    }
}

impl<'a> IntoIterator for &'a PageWindow {
    type Item = &'a PageMarker;
    type IntoIter = std::slice::Iter<'a, PageMarker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}

/// Compute the markers a pager shows for `current_page` out of `total_pages`.
///
/// `current_page` must already be clamped into `[1, total_pages]` when
/// `total_pages > 0`. An out-of-range page is a caller error: the result is
/// still a well-formed window but which branch it lands in is unspecified.
///
/// With more than [`FULL_RANGE_MAX_PAGES`] pages the window keeps page 1,
/// the last page, and a short run around the current page:
///
/// - near the start (`current_page <= 3`): `1 2 3 4 … N`
/// - near the end (`current_page >= N - 2`): `1 … N-3 N-2 N-1 N`
/// - otherwise: `1 … c-1 c c+1 … N`
pub fn compute_page_window(current_page: usize, total_pages: usize) -> PageWindow {
    if total_pages <= FULL_RANGE_MAX_PAGES {
        return PageWindow {
            markers: (1..=total_pages).map(PageMarker::Number).collect(),
        };
    }

    let mut markers = Vec::with_capacity(7);

    if current_page <= 3 {
        markers.extend((1..=4).map(PageMarker::Number));
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::Number(total_pages));
    } else if current_page >= total_pages - 2 {
        markers.push(PageMarker::Number(1));
        markers.push(PageMarker::Ellipsis);
        markers.extend((total_pages - 3..=total_pages).map(PageMarker::Number));
    } else {
        markers.push(PageMarker::Number(1));
        markers.push(PageMarker::Ellipsis);
        markers.extend((current_page - 1..=current_page + 1).map(PageMarker::Number));
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::Number(total_pages));
    }

    PageWindow { markers }
}
