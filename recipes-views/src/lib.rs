pub mod recipes;
pub mod utility;

use recipes_core::Context;
use recipes_utils::parse::parse_page_request;

/// Per-terminal view state. The session is the sole owner of the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub current_page: usize,
    /// Page count from the last successful listing; 0 until one arrives.
    pub total_pages: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
        }
    }
}

/// What the caller should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render(String),
    Ignored,
    Quit,
}

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    recipes::list::META,
    recipes::list::NEXT_META,
    recipes::list::PREV_META,
    recipes::list::PAGE_META,
    recipes::detail::META,
    utility::help::META,
    utility::usage::META,
    utility::quit::META,
    // Add new commands here
];

/// Split a raw line into a lowercased command, its first argument, and the rest.
pub fn split_command(line: &str) -> Option<(String, Option<&str>, Option<&str>)> {
    let content = line.trim();
    if content.is_empty() {
        return None;
    }

    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let (arg1, arg_tail) = match rest {
        Some(value) => {
            let mut args = value.splitn(2, char::is_whitespace);
            let first = args.next().filter(|arg| !arg.is_empty());
            let tail = args
                .next()
                .map(str::trim)
                .filter(|remaining| !remaining.is_empty());

            (first, tail)
        }
        None => (None, None),
    };

    Some((cmd, arg1, arg_tail))
}

pub async fn handle_line(
    ctx: &Context,
    session: &mut Session,
    line: &str,
) -> anyhow::Result<Outcome> {
    let Some((cmd, arg1, _arg_tail)) = split_command(line) else {
        return Ok(Outcome::Ignored);
    };

    let out = match cmd.as_str() {
        "list" | "ls" => recipes::list::run(ctx, session, arg1).await?,
        "next" | "n" => recipes::list::run_next(ctx, session).await?,
        "prev" | "p" => recipes::list::run_prev(ctx, session).await?,
        "page" => recipes::list::run_page(ctx, session, arg1).await?,
        "show" => recipes::detail::run(ctx, arg1).await?,

        "help" => utility::help::run(),
        "usage" => utility::usage::run(arg1),
        "quit" | "exit" | "q" => return Ok(Outcome::Quit),
        // Add new commands here
        other => match parse_page_request(other) {
            // Bare pager tokens (`4`, `›`) act like clicking the control.
            Some(request) => recipes::list::navigate(ctx, session, request).await?,
            None => format!("Unknown command: `{other}`. Type `help` for a list."),
        },
    };

    Ok(Outcome::Render(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_command_and_arguments() {
        assert_eq!(
            split_command("  SHOW 12  extra words "),
            Some(("show".to_owned(), Some("12"), Some("extra words")))
        );
        assert_eq!(split_command("next"), Some(("next".to_owned(), None, None)));
        assert_eq!(split_command("   "), None);
    }

    #[test]
    fn command_names_are_unique() {
        let mut names = COMMANDS.iter().map(|command| command.name).collect::<Vec<_>>();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COMMANDS.len());
    }

    fn offline_context() -> Context {
        // Nothing listens on port 1, so every fetch fails fast.
        let catalog = recipes_catalog::Catalog::connect(
            "http://127.0.0.1:1",
            std::time::Duration::from_secs(2),
        )
        .unwrap();
        Context::new(catalog, recipes_core::Config::default())
    }

    async fn render(ctx: &Context, session: &mut Session, line: &str) -> String {
        match handle_line(ctx, session, line).await.unwrap() {
            Outcome::Render(out) => out,
            other => panic!("expected rendered output for `{line}`, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn session_owns_page_through_navigation() {
        let ctx = offline_context();
        let mut session = Session {
            current_page: 5,
            total_pages: 10,
        };

        // Hidden behind an ellipsis: refused, page untouched.
        let out = render(&ctx, &mut session, "page 8").await;
        assert!(out.starts_with("Page 8 is not shown"));
        assert_eq!(
            session,
            Session {
                current_page: 5,
                total_pages: 10
            }
        );

        // Accepted change is applied even though the fetch fails; the known
        // total survives the failure.
        let out = render(&ctx, &mut session, "next").await;
        assert!(out.ends_with(recipes::list::EMPTY_MESSAGE));
        assert_eq!(
            session,
            Session {
                current_page: 6,
                total_pages: 10
            }
        );

        let out = render(&ctx, &mut session, "list 40").await;
        assert_eq!(out, "Page 40 does not exist. Available pages: 1-10.");
        assert_eq!(session.current_page, 6);

        let out = render(&ctx, &mut session, "4").await;
        assert!(out.starts_with("Page 4 is not shown"));
        assert_eq!(session.current_page, 6);
    }

    #[tokio::test]
    async fn step_past_first_page_is_refused() {
        let ctx = offline_context();
        let mut session = Session {
            current_page: 1,
            total_pages: 3,
        };

        let out = render(&ctx, &mut session, "prev").await;
        assert_eq!(out, "Already on the first page.");
        assert_eq!(session.current_page, 1);
        assert_eq!(
            handle_line(&ctx, &mut session, "quit").await.unwrap(),
            Outcome::Quit
        );
    }

    #[tokio::test]
    async fn detail_failure_renders_not_found_view() {
        let ctx = offline_context();
        let out = render(&ctx, &mut Session::default(), "show 7").await;
        assert!(out.contains(recipes::detail::NOT_FOUND_TITLE));
        assert!(out.contains("Failed to reach catalog"));
    }

    #[test]
    fn session_starts_on_first_page() {
        let session = Session::default();
        assert_eq!(session.current_page, 1);
        assert_eq!(session.total_pages, 0);
    }
}
