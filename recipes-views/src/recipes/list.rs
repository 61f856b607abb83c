use tracing::{debug, error, info};

use crate::{CommandMeta, Session};
use recipes_catalog::RecipesPage;
use recipes_core::Context;
use recipes_utils::pagination::{
    PageRequest, Pager, clamp_page, page_footer, page_offset, parse_one_based_page, render_pager,
    total_pages,
};

use super::card::render_card;

pub const META: CommandMeta = CommandMeta {
    name: "list",
    desc: "List recipes, optionally starting at a page.",
    category: "recipes",
    usage: "list [page]",
};

pub const NEXT_META: CommandMeta = CommandMeta {
    name: "next",
    desc: "Go to the next page of recipes.",
    category: "recipes",
    usage: "next",
};

pub const PREV_META: CommandMeta = CommandMeta {
    name: "prev",
    desc: "Go to the previous page of recipes.",
    category: "recipes",
    usage: "prev",
};

pub const PAGE_META: CommandMeta = CommandMeta {
    name: "page",
    desc: "Select a page shown in the pager.",
    category: "recipes",
    usage: "page <number>",
};

pub const LIST_TITLE: &str = "Recipe Collection";
pub const LIST_SUBTITLE: &str = "Discover delicious recipes from around the world";
pub const EMPTY_MESSAGE: &str = "No recipes found";

/// Show a page of the listing.
///
/// Inputs:
/// - optional page number: `list [page]`.
///
/// Error behavior:
/// - returns usage text on invalid page input.
/// - returns bounds text when the page is past the last known page.
pub async fn run(
    ctx: &Context,
    session: &mut Session,
    arg1: Option<&str>,
) -> anyhow::Result<String> {
    let Some(requested_page) = parse_one_based_page(arg1) else {
        return Ok(format!("Usage: `{}` (page starts at 1)", META.usage));
    };

    if session.total_pages > 0 && requested_page > session.total_pages {
        return Ok(page_out_of_range_message(requested_page, session.total_pages));
    }

    session.current_page = requested_page;
    Ok(load_page(ctx, session).await)
}

pub async fn run_next(ctx: &Context, session: &mut Session) -> anyhow::Result<String> {
    navigate(ctx, session, PageRequest::Next).await
}

pub async fn run_prev(ctx: &Context, session: &mut Session) -> anyhow::Result<String> {
    navigate(ctx, session, PageRequest::Previous).await
}

pub async fn run_page(
    ctx: &Context,
    session: &mut Session,
    arg1: Option<&str>,
) -> anyhow::Result<String> {
    let Some(page) = arg1.and_then(|raw| raw.trim().parse::<usize>().ok()) else {
        return Ok(format!("Usage: `{}`", PAGE_META.usage));
    };

    navigate(ctx, session, PageRequest::Select(page)).await
}

/// Apply a pager request to the session and reload the listing.
///
/// Rejected requests leave the current page untouched.
pub async fn navigate(
    ctx: &Context,
    session: &mut Session,
    request: PageRequest,
) -> anyhow::Result<String> {
    let pager = Pager::new(session.current_page, session.total_pages);
    let Some(change) = pager.resolve(request) else {
        return Ok(rejected_request_message(&pager, request));
    };

    debug!(from = change.from, to = change.to, "page change");
    session.current_page = change.to;
    Ok(load_page(ctx, session).await)
}

async fn load_page(ctx: &Context, session: &mut Session) -> String {
    let per_page = ctx.config.recipes_per_page;
    let skip = page_offset(session.current_page, per_page);

    match ctx.catalog.list_recipes(per_page, skip).await {
        Ok(page) => {
            record_listing_total(session, page.total, per_page);
            info!(
                page = session.current_page,
                total_pages = session.total_pages,
                count = page.recipes.len(),
                "loaded recipes"
            );
            render_list(&page, &Pager::new(session.current_page, session.total_pages))
        }
        Err(source) => {
            error!(?source, page = session.current_page, "failed to fetch recipes");
            render_list(&RecipesPage::default(), &Pager::new(1, 0))
        }
    }
}

/// Store the page count from a fresh listing and pull the current page back
/// into `[1, total_pages]` if the catalog shrank or the request overshot.
pub fn record_listing_total(session: &mut Session, total_items: usize, per_page: usize) {
    session.total_pages = total_pages(total_items, per_page);
    session.current_page = clamp_page(session.current_page, session.total_pages);
}

/// Render the listing: header, cards, then the pager and footer.
pub fn render_list(page: &RecipesPage, pager: &Pager) -> String {
    let mut sections = vec![format!("{LIST_TITLE}\n{LIST_SUBTITLE}")];

    if page.recipes.is_empty() {
        sections.push(EMPTY_MESSAGE.to_owned());
        return sections.join("\n\n");
    }

    sections.extend(page.recipes.iter().map(render_card));

    let note = format!("{} recipes", page.total);
    let footer = page_footer(pager.current_page(), pager.total_pages(), Some(note.as_str()));
    sections.push(format!("{}\n{footer}", render_pager(pager)));

    sections.join("\n\n")
}

pub fn page_out_of_range_message(page: usize, total_pages: usize) -> String {
    format!("Page {page} does not exist. Available pages: 1-{total_pages}.")
}

fn rejected_request_message(pager: &Pager, request: PageRequest) -> String {
    if pager.total_pages() == 0 {
        return "No recipes loaded yet. Type `list` to load the first page.".to_owned();
    }

    match request {
        PageRequest::Previous => "Already on the first page.".to_owned(),
        PageRequest::Next => "Already on the last page.".to_owned(),
        PageRequest::Select(page) if page == pager.current_page() => {
            format!("Already on page {page}.")
        }
        PageRequest::Select(page) if page >= 1 && page <= pager.total_pages() => format!(
            "Page {page} is not shown in the pager. Use `list {page}` to jump there."
        ),
        PageRequest::Select(page) => page_out_of_range_message(page, pager.total_pages()),
    }
}

#[cfg(test)]
mod tests {
    use recipes_catalog::Recipe;

    use super::*;

    fn listing(count: usize, total: usize) -> RecipesPage {
        RecipesPage {
            recipes: (1..=count as u64)
                .map(|id| Recipe {
                    id,
                    name: format!("Recipe {id}"),
                    difficulty: "Easy".to_owned(),
                    rating: 4.0,
                    ..Recipe::default()
                })
                .collect(),
            total,
            skip: 0,
            limit: 12,
        }
    }

    #[test]
    fn renders_cards_pager_and_footer() {
        let out = render_list(&listing(2, 50), &Pager::new(1, 5));

        assert!(out.starts_with("Recipe Collection\nDiscover delicious recipes"));
        assert!(out.contains("Recipe 1  -> /recipe/1"));
        assert!(out.contains("Recipe 2  -> /recipe/2"));
        assert!(out.ends_with("  [1] 2 3 4 5 ›\nPage 1/5 • 50 recipes"));
    }

    #[test]
    fn renders_truncated_pager_for_many_pages() {
        let out = render_list(&listing(1, 120), &Pager::new(5, 10));
        assert!(out.ends_with("‹ 1 … 4 [5] 6 … 10 ›\nPage 5/10 • 120 recipes"));
    }

    #[test]
    fn empty_listing_shows_message_without_pager() {
        let out = render_list(&RecipesPage::default(), &Pager::new(1, 0));
        assert!(out.ends_with(EMPTY_MESSAGE));
        assert!(!out.contains('›'));
    }

    #[test]
    fn listing_total_clamps_overshooting_page() {
        let mut session = Session {
            current_page: 50,
            total_pages: 0,
        };
        record_listing_total(&mut session, 50, 12);
        assert_eq!(
            session,
            Session {
                current_page: 5,
                total_pages: 5
            }
        );

        let mut in_range = Session {
            current_page: 3,
            total_pages: 5,
        };
        record_listing_total(&mut in_range, 120, 12);
        assert_eq!(in_range.current_page, 3);
        assert_eq!(in_range.total_pages, 10);
    }

    #[test]
    fn rejected_requests_explain_themselves() {
        let pager = Pager::new(5, 10);
        assert_eq!(
            rejected_request_message(&pager, PageRequest::Select(8)),
            "Page 8 is not shown in the pager. Use `list 8` to jump there."
        );
        assert_eq!(
            rejected_request_message(&pager, PageRequest::Select(11)),
            "Page 11 does not exist. Available pages: 1-10."
        );
        assert_eq!(
            rejected_request_message(&pager, PageRequest::Select(5)),
            "Already on page 5."
        );
        assert_eq!(
            rejected_request_message(&Pager::new(1, 10), PageRequest::Previous),
            "Already on the first page."
        );
        assert!(
            rejected_request_message(&Pager::new(1, 0), PageRequest::Next)
                .starts_with("No recipes loaded yet")
        );
    }
}
