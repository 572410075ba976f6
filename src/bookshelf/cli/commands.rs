use super::render::{write_books, write_statistics};
use super::setup::{Cli, Commands};
use super::shell::{SessionEnd, Shell};
use anyhow::{Context, Result};
use bookshelf::api::Catalog;
use bookshelf::config::{self, ShelfConfig};
use bookshelf::store::fs::FileStore;
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    catalog: Catalog<FileStore>,
}

/// Parse arguments, dispatch, and return the process exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut ctx = init_context()?;

    match cli.command {
        None | Some(Commands::Shell) => handle_shell(&mut ctx),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Search { author, query }) => handle_search(&ctx, author, &query),
        Some(Commands::Stats) => handle_stats(&ctx),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .try_init();
}

fn init_context() -> Result<AppContext> {
    let data_dir = config::data_dir()?;
    let shelf_config = ShelfConfig::load(&data_dir)
        .with_context(|| format!("loading config from {}", data_dir.display()))?;
    let store = FileStore::new(shelf_config.catalog_path(&data_dir));
    debug!(path = %store.path().display(), "using catalog file");

    Ok(AppContext {
        catalog: Catalog::open(store),
    })
}

fn handle_shell(ctx: &mut AppContext) -> Result<i32> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = Shell::new(&mut ctx.catalog, stdin.lock(), stdout.lock()).run()?;
    Ok(match end {
        SessionEnd::Saved => 0,
        SessionEnd::SaveFailed => 1,
    })
}

fn handle_list(ctx: &AppContext) -> Result<i32> {
    let mut out = io::stdout().lock();
    write_books(&mut out, "Your Library:", ctx.catalog.books())?;
    out.flush()?;
    Ok(0)
}

fn handle_search(ctx: &AppContext, by_author: bool, query: &str) -> Result<i32> {
    let results = if by_author {
        ctx.catalog.search_by_author(query)
    } else {
        ctx.catalog.search_by_title(query)
    };
    let mut out = io::stdout().lock();
    write_books(&mut out, "Matching Books:", &results)?;
    out.flush()?;
    Ok(0)
}

fn handle_stats(ctx: &AppContext) -> Result<i32> {
    let mut out = io::stdout().lock();
    write_statistics(&mut out, &ctx.catalog.statistics())?;
    out.flush()?;
    Ok(0)
}
