//! Text rendering for pager controls.

use super::nav::Pager;
use super::window::PageMarker;

pub const PREVIOUS_ARROW: &str = "‹";
pub const NEXT_ARROW: &str = "›";
pub const ELLIPSIS: &str = "…";

/// Render a pager as a single line, e.g. `‹ 1 … 4 [5] 6 … 10 ›`.
///
/// Disabled arrows are replaced by a blank so the line keeps its width.
/// A pager without pages renders as an empty string.
pub fn render_pager(pager: &Pager) -> String {
    let window = pager.window();
    if window.is_empty() {
        return String::new();
    }

    let mut tokens = Vec::with_capacity(window.len() + 2);
    tokens.push(arrow(PREVIOUS_ARROW, pager.has_previous()));

    for marker in &window {
        let token = match *marker {
            PageMarker::Number(page) if page == pager.current_page() => format!("[{page}]"),
            PageMarker::Number(page) => page.to_string(),
            PageMarker::Ellipsis => ELLIPSIS.to_owned(),
        };
        tokens.push(token);
    }

    tokens.push(arrow(NEXT_ARROW, pager.has_next()));
    tokens.join(" ")
}

fn arrow(glyph: &str, enabled: bool) -> String {
    if enabled {
        glyph.to_owned()
    } else {
        " ".repeat(glyph.chars().count())
    }
}

/// Build a `Page x/y` footer with an optional note.
pub fn page_footer(page: usize, total_pages: usize, note: Option<&str>) -> String {
    let page = page.max(1);
    let total_pages = total_pages.max(1);

    if total_pages > 1 {
        match note {
            Some(note) if !note.is_empty() => format!("Page {page}/{total_pages} • {note}"),
            _ => format!("Page {page}/{total_pages}"),
        }
    } else {
        match note {
            Some(note) if !note.is_empty() => note.to_owned(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_truncated_middle() {
        assert_eq!(render_pager(&Pager::new(5, 10)), "‹ 1 … 4 [5] 6 … 10 ›");
    }

    #[test]
    fn blanks_disabled_arrows() {
        assert_eq!(render_pager(&Pager::new(1, 3)), "  [1] 2 3 ›");
        assert_eq!(render_pager(&Pager::new(10, 10)), "‹ 1 … 7 8 9 [10]  ");
        assert_eq!(render_pager(&Pager::new(1, 1)), "  [1]  ");
    }

    #[test]
    fn empty_pager_renders_nothing() {
        assert_eq!(render_pager(&Pager::new(1, 0)), "");
    }

    #[test]
    fn footer_variants() {
        assert_eq!(page_footer(2, 5, None), "Page 2/5");
        assert_eq!(page_footer(2, 5, Some("50 recipes")), "Page 2/5 • 50 recipes");
        assert_eq!(page_footer(1, 1, Some("3 recipes")), "3 recipes");
        assert_eq!(page_footer(1, 0, None), "");
    }
}
