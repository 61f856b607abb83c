use crate::pagination::PageRequest;

/// Parse a recipe id from a raw argument (`12`, `#12`, or a `/recipe/12` link).
pub fn parse_recipe_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();

    let numeric = if let Some(path) = trimmed.strip_prefix("/recipe/") {
        path.trim_end_matches('/')
    } else {
        trimmed.strip_prefix('#').unwrap_or(trimmed)
    };

    numeric.parse::<u64>().ok().filter(|id| *id >= 1)
}

/// Parse a pager token: an arrow or step word, or a page number.
pub fn parse_page_request(raw: &str) -> Option<PageRequest> {
    let value = raw.trim();

    match value.to_ascii_lowercase().as_str() {
        "p" | "prev" | "previous" | "‹" | "<" => Some(PageRequest::Previous),
        "n" | "next" | "›" | ">" => Some(PageRequest::Next),
        _ => value
            .parse::<usize>()
            .ok()
            .filter(|page| *page >= 1)
            .map(PageRequest::Select),
    }
}
