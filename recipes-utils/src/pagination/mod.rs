//! Stable facade for pagination helpers used by views.

mod nav;
mod page;
mod render;
mod window;

pub use nav::{PageChange, PageRequest, Pager};
pub use page::{clamp_page, page_offset, parse_one_based_page, total_pages};
pub use render::{ELLIPSIS, NEXT_ARROW, PREVIOUS_ARROW, page_footer, render_pager};
pub use window::{FULL_RANGE_MAX_PAGES, PageMarker, PageWindow, compute_page_window};
