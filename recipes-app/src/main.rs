use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use recipes_core::{Config, Context};
use recipes_views::{Outcome, Session, handle_line};

const PROMPT: &str = "recipes> ";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load the .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so rendered views own stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    let ctx = Context::from_config(config)?;
    info!(base_url = ctx.catalog.base_url(), "Recipe browser starting.");

    let mut session = Session::default();
    let mut stdout = tokio::io::stdout();

    if let Outcome::Render(out) = handle_line(&ctx, &mut session, "list").await? {
        write_block(&mut stdout, &out).await?;
    }
    write_prompt(&mut stdout).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match handle_line(&ctx, &mut session, &line).await {
            Ok(Outcome::Render(out)) => write_block(&mut stdout, &out).await?,
            Ok(Outcome::Ignored) => {}
            Ok(Outcome::Quit) => break,
            Err(source) => {
                error!(?source, line = %line.trim(), "command failed");
            }
        }
        write_prompt(&mut stdout).await?;
    }

    info!("Recipe browser closed.");
    Ok(()) // stdin closed or quit requested
}

async fn write_block(stdout: &mut Stdout, text: &str) -> std::io::Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n\n").await?;
    stdout.flush().await
}

async fn write_prompt(stdout: &mut Stdout) -> std::io::Result<()> {
    stdout.write_all(PROMPT.as_bytes()).await?;
    stdout.flush().await
}
