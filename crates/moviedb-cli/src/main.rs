//! moviedb - TMDB movie catalog CLI.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use crate::config::{AppConfig, resolve_config_path};
use moviedb_api::MovieClient;
use moviedb_catalog::{Movie, MoviePager, MovieRepository};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// TMDB API bearer token. Falls back to config.toml if omitted.
    #[arg(long, global = true, env = "MOVIEDB_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Browse the general movie listing one page at a time.
    Discover(DiscoverArgs),
    /// Search for movies by text query.
    Search(SearchArgs),
    /// Show full details for a single movie.
    Details(DetailsArgs),
    /// Show cast credits for a single movie.
    Credits(CreditsArgs),
    /// Walk the listing across pages following next-page keys.
    Browse(BrowseArgs),
}

/// Arguments for the `discover` subcommand.
#[derive(clap::Args)]
struct DiscoverArgs {
    /// Result page (1-500).
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query (e.g. "inception").
    #[arg(long, required = true)]
    query: String,
    /// Result page (1-500).
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for the `details` subcommand.
#[derive(clap::Args)]
struct DetailsArgs {
    /// TMDB movie ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for the `credits` subcommand.
#[derive(clap::Args)]
struct CreditsArgs {
    /// TMDB movie ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for the `browse` subcommand.
#[derive(clap::Args)]
struct BrowseArgs {
    /// Search query. Omit to browse the discover listing.
    #[arg(long)]
    query: Option<String>,
    /// Maximum number of pages to walk.
    #[arg(long, default_value_t = 3)]
    pages: u32,
}

/// Resolves the API token from CLI/env or `config.toml`.
fn resolve_api_token(flag: Option<String>, dir: Option<&PathBuf>) -> Result<String> {
    if let Some(token) = flag {
        return Ok(token);
    }

    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    match config.auth.api_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => bail!(
            "no API token configured: pass --api-token, set MOVIEDB_API_TOKEN, \
             or add `api_token` under [auth] in {}",
            config_path.display()
        ),
    }
}

/// Builds the repository with the standard User-Agent.
fn build_repository(api_token: String) -> Result<MovieRepository<MovieClient>> {
    let client = MovieClient::builder()
        .api_token(api_token)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build API client")?;
    Ok(MovieRepository::new(client))
}

/// Prints one listing row per movie.
fn print_movie_rows(movies: &[Movie]) {
    tracing::info!("{:>9}  {:<10}  {:>5}  Title", "ID", "Released", "Score");
    for movie in movies {
        tracing::info!(
            "{:>9}  {:<10}  {:>5.1}  {}",
            movie.id,
            if movie.release_date.is_empty() {
                "-"
            } else {
                movie.release_date.as_str()
            },
            movie.vote_average,
            movie.title,
        );
    }
}

/// Runs the `discover` subcommand.
///
/// # Errors
///
/// Returns an error if the API client fails to build or the request fails.
#[instrument(skip_all)]
async fn run_discover(args: &DiscoverArgs, api_token: String) -> Result<()> {
    let repo = build_repository(api_token)?;

    let page = repo.movie_page(None, args.page).await?;

    print_movie_rows(&page.results);
    tracing::info!(
        "Page {}/{} ({} movies total)",
        page.page,
        page.total_pages,
        page.total_results
    );

    Ok(())
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the API client fails to build or the request fails.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, api_token: String) -> Result<()> {
    let repo = build_repository(api_token)?;

    let page = repo.movie_page(Some(&args.query), args.page).await?;

    if page.results.is_empty() {
        tracing::info!("No movies found for \"{}\"", args.query);
        return Ok(());
    }

    print_movie_rows(&page.results);
    tracing::info!(
        "Page {}/{} ({} movies total)",
        page.page,
        page.total_pages,
        page.total_results
    );

    Ok(())
}

/// Runs the `details` subcommand.
///
/// # Errors
///
/// Returns an error if the API client fails to build or the request fails.
#[instrument(skip_all)]
async fn run_details(args: &DetailsArgs, api_token: String) -> Result<()> {
    let repo = build_repository(api_token)?;

    let detail = repo.movie_detail(args.id).await?;

    tracing::info!("{} ({})", detail.title, detail.release_date);
    if !detail.tagline.is_empty() {
        tracing::info!("\"{}\"", detail.tagline);
    }
    tracing::info!(
        "Status: {}  Runtime: {} min  Score: {:.1} ({} votes)",
        detail.status,
        detail.runtime,
        detail.vote_average,
        detail.vote_count
    );
    let genres: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
    tracing::info!("Genres: {}", genres.join(", "));
    if !detail.overview.is_empty() {
        tracing::info!("{}", detail.overview);
    }

    Ok(())
}

/// Runs the `credits` subcommand.
///
/// # Errors
///
/// Returns an error if the API client fails to build or the request fails.
#[instrument(skip_all)]
async fn run_credits(args: &CreditsArgs, api_token: String) -> Result<()> {
    let repo = build_repository(api_token)?;

    let credits = repo.movie_credits(args.id).await?;

    tracing::info!("{:>5}  {:<24}  Character", "Order", "Name");
    for cast in &credits.cast {
        tracing::info!("{:>5}  {:<24}  {}", cast.order, cast.name, cast.character);
    }
    tracing::info!("Total: {} cast members", credits.cast.len());

    Ok(())
}

/// Runs the `browse` subcommand.
///
/// Walks the listing from page 1 following next-page keys until the
/// listing ends or `--pages` pages have been loaded.
///
/// # Errors
///
/// Returns an error if the API client fails to build or a page load fails.
#[instrument(skip_all)]
async fn run_browse(args: &BrowseArgs, api_token: String) -> Result<()> {
    let repo = build_repository(api_token)?;
    let mut pager = MoviePager::new(repo, args.query.clone());

    let mut key = None;
    let mut loaded = 0u32;
    while loaded < args.pages {
        let page = pager.load(key).await?;
        loaded = loaded.saturating_add(1);

        tracing::info!(
            "--- page {} (prev: {}, next: {}) ---",
            key.unwrap_or(1),
            page.prev_key
                .map_or_else(|| String::from("-"), |k| k.to_string()),
            page.next_key
                .map_or_else(|| String::from("-"), |k| k.to_string()),
        );
        print_movie_rows(&page.movies);

        match page.next_key {
            Some(next) => key = Some(next),
            None => break,
        }
    }
    tracing::info!("Loaded {} page(s), {} cached", loaded, pager.cached_len());

    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let api_token = resolve_api_token(cli.api_token, cli.dir.as_ref())?;
    match cli.command {
        Commands::Discover(args) => run_discover(&args, api_token).await,
        Commands::Search(args) => run_search(&args, api_token).await,
        Commands::Details(args) => run_details(&args, api_token).await,
        Commands::Credits(args) => run_credits(&args, api_token).await,
        Commands::Browse(args) => run_browse(&args, api_token).await,
    }
}
