//! Terminal host for the verticals step.
//!
//! Drives a [`VerticalsViewModel`] from stdin and redraws the screen from
//! every published snapshot.
//!
//! # Usage
//!
//! ```text
//! siteflow [config.toml]
//! ```
//!
//! Each stdin line is one event:
//!
//! - any text: replaces the query
//! - `:clear`: clears the query
//! - `:retry`: retries the header fetch
//! - `:retry-suggestions`: retries a failed suggestion fetch
//! - `:pick <n>`: selects the n-th suggestion (1-based)
//! - `:skip`: skips the step
//! - `:stats [more]`: prints the posts & pages block; `more` follows its link
//! - `:q`: quits

#![allow(clippy::multiple_crate_versions)]

use siteflow::app::{handle_event, Action, Event, StateSubscription, VerticalsViewModel};
use siteflow::observability::init_tracing;
use siteflow::stats::{
    LinkTarget, LocalDateFormatter, PostsAndPagesUseCase, Site, StatsGranularity,
};
use siteflow::storage::{Catalog, JsonCatalog};
use siteflow::ui::{apply_edits, diff_rows, render_frame, render_stats_block, Theme, VerticalsListItem};
use siteflow::usecases::{CatalogHeaderInfo, CatalogPostAndPageViews, CatalogVerticals};
use siteflow::{Config, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::task::JoinHandle;

/// Simulated collaborator latency so loading states are visible.
const DEMO_LATENCY: Duration = Duration::from_millis(300);

const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("siteflow: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => Config::from_toml_file(PathBuf::from(path))?,
        None => Config::default(),
    };
    init_tracing(&config);
    tracing::info!(?config, "siteflow starting");

    let theme = config.load_theme().or_else(|e| {
        tracing::warn!(error = %e, "failed to load theme, using default");
        Theme::load(None, None)
    })?;
    let catalog = open_catalog(&config)?;

    let vm = VerticalsViewModel::with_current_runtime(
        Arc::new(CatalogHeaderInfo::new(Arc::clone(&catalog)).with_latency(DEMO_LATENCY)),
        Arc::new(
            CatalogVerticals::new(Arc::clone(&catalog))
                .with_max_suggestions(config.max_suggestions)
                .with_latency(DEMO_LATENCY),
        ),
    )?
    .with_debounce(config.debounce());

    let stats = PostsAndPagesUseCase::new(
        StatsGranularity::Days,
        Arc::new(CatalogPostAndPageViews::new(catalog).with_latency(DEMO_LATENCY)),
        Arc::new(LocalDateFormatter),
    );
    let site = Site::new(1, "example.com");

    let (rows, cols) = terminal_size();
    let renderer = spawn_renderer(vm.subscribe(), theme.clone(), rows, cols);
    vm.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let event = match parse_command(line.trim_end()) {
            Command::Event(event) => event,
            Command::Pick(n) => {
                let picked = vm.current().and_then(|state| {
                    state
                        .suggestions()
                        .nth(n.saturating_sub(1))
                        .map(|(id, _)| id.to_string())
                });
                match picked {
                    Some(id) => Event::SuggestionClicked { id },
                    None => {
                        tracing::debug!(n, "no suggestion at position");
                        continue;
                    }
                }
            }
            Command::Stats { follow_link } => {
                let block = stats.fetch(&site, true, false).await;
                print_frame(&render_stats_block(&block, &theme, cols)).await?;
                if follow_link {
                    stats.navigate(LinkTarget::ViewPostsAndPages);
                    let target = stats.navigation_targets().borrow().clone();
                    if let Some(target) = target {
                        print_frame(&format!("\r\n→ {target:?}\r\n")).await?;
                    }
                }
                continue;
            }
            Command::Unknown(cmd) => {
                tracing::debug!(command = %cmd, "unknown command");
                continue;
            }
        };

        let actions = match handle_event(&vm, &event) {
            Ok(actions) => actions,
            Err(e) => {
                tracing::warn!(error = %e, ?event, "event rejected");
                continue;
            }
        };
        if let Some(outcome) = actions.into_iter().find_map(describe_exit) {
            vm.close();
            join_renderer(renderer).await;
            println!("{outcome}");
            return Ok(());
        }
    }

    vm.close();
    join_renderer(renderer).await;
    Ok(())
}

/// Uses the configured catalog as is; otherwise seeds the data directory
/// from the bundled catalog and reads that copy.
fn open_catalog(config: &Config) -> Result<Arc<dyn Catalog>> {
    let path = config.resolved_catalog_path();
    if config.catalog_path.is_none() {
        match JsonCatalog::write_bundled(&path) {
            Ok(written) => tracing::debug!(path = ?path, written, "catalog ready"),
            Err(e) => {
                tracing::warn!(error = %e, "cannot seed catalog, using bundled copy");
                return Ok(Arc::new(JsonCatalog::bundled()?));
            }
        }
    }
    Ok(Arc::new(JsonCatalog::open(&path)?))
}

fn spawn_renderer(
    mut states: StateSubscription,
    theme: Theme,
    rows: usize,
    cols: usize,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut displayed = Vec::new();
        while let Some(state) = states.next().await {
            let edits = patch_rows(&mut displayed, &state.items);
            tracing::debug!(mode = ?state.mode, edits, "redrawing");

            let frame = format!("{CLEAR_SCREEN}{}", render_frame(&state, &theme, rows, cols));
            if let Err(e) = print_frame(&frame).await {
                tracing::warn!(error = %e, "stdout closed, renderer stopping");
                return;
            }
        }
    })
}

/// Brings `displayed` up to date with `new` by replaying the row edit
/// script, returning the number of edits.
fn patch_rows(displayed: &mut Vec<VerticalsListItem>, new: &[VerticalsListItem]) -> usize {
    let edits = diff_rows(displayed.as_slice(), new);
    *displayed = apply_edits(displayed.as_slice(), new, &edits);
    edits.len()
}

async fn join_renderer(renderer: JoinHandle<()>) {
    if let Err(e) = renderer.await {
        tracing::warn!(error = %e, "renderer task failed");
    }
}

async fn print_frame(frame: &str) -> std::io::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(frame.as_bytes()).await?;
    stdout.flush().await
}

/// Terminal size from `LINES`/`COLUMNS`, falling back to 24x80.
fn terminal_size() -> (usize, usize) {
    let read = |key: &str, fallback: usize| {
        std::env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(fallback)
    };
    (read("LINES", 24), read("COLUMNS", 80))
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Event(Event),
    Pick(usize),
    Stats { follow_link: bool },
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let Some(command) = line.strip_prefix(':') else {
        return Command::Event(Event::QueryChanged(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("q" | "quit"), None) => Command::Event(Event::Close),
        (Some("clear"), None) => Command::Event(Event::ClearQuery),
        (Some("retry"), None) => Command::Event(Event::RetryHeader),
        (Some("retry-suggestions"), None) => Command::Event(Event::RetrySuggestions),
        (Some("skip"), None) => Command::Event(Event::Skip),
        (Some("stats"), None) => Command::Stats { follow_link: false },
        (Some("stats"), Some("more")) => Command::Stats { follow_link: true },
        (Some("pick"), Some(n)) => n
            .parse()
            .map_or_else(|_| Command::Unknown(line.to_string()), Command::Pick),
        _ => Command::Unknown(line.to_string()),
    }
}

fn describe_exit(action: Action) -> Option<String> {
    match action {
        Action::VerticalSelected { id, name } => Some(format!("selected {name} ({id})")),
        Action::SkipStep => Some("step skipped".to_string()),
        Action::Close => Some("closed".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_queries() {
        assert_eq!(
            parse_command("garden"),
            Command::Event(Event::QueryChanged("garden".to_string()))
        );
        assert_eq!(parse_command(""), Command::Event(Event::QueryChanged(String::new())));
    }

    #[test]
    fn patched_rows_follow_each_snapshot() {
        let suggestion = |id: &str, show_divider: bool| VerticalsListItem::Suggestion {
            id: id.to_string(),
            title: id.to_uppercase(),
            show_divider,
        };
        let mut displayed = Vec::new();

        let first = vec![suggestion("a", true), suggestion("b", false)];
        assert_eq!(patch_rows(&mut displayed, &first), 1);
        assert_eq!(displayed, first);

        let second = vec![suggestion("b", true), suggestion("c", false)];
        patch_rows(&mut displayed, &second);
        assert_eq!(displayed, second);

        assert_eq!(patch_rows(&mut displayed, &second), 0);
    }

    #[tokio::test]
    async fn renderer_panic_does_not_escape_join() {
        let renderer = tokio::spawn(async { panic!("frame failed") });
        join_renderer(renderer).await;
        join_renderer(tokio::spawn(async {})).await;
    }

    #[test]
    fn colon_commands() {
        assert_eq!(parse_command(":q"), Command::Event(Event::Close));
        assert_eq!(parse_command(":pick 3"), Command::Pick(3));
        assert_eq!(parse_command(":stats more"), Command::Stats { follow_link: true });
        assert!(matches!(parse_command(":pick x"), Command::Unknown(_)));
        assert!(matches!(parse_command(":nope"), Command::Unknown(_)));
    }
}
