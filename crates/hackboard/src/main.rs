//! hackboard - Hackatime coding-time dashboard with store progress

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hackboard_core::source::api::{HackatimeClient, StoreClient};
use hackboard_core::source::file::{FileStatsSource, FileStoreSource};
use hackboard_core::source::{storage, StatsSource, StoreSource};
use hackboard_core::{build_progress_report, compute_cookies, Catalog, Settings, StatsSnapshot};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hackboard",
    version,
    about = "Hackatime coding-time dashboard with Hack Club store progress",
    long_about = "Shows your Hackatime coding-time statistics and, if a target store item\n\
                  is configured, progress toward buying it with the cookies your hours earn.\n\
                  \n\
                  Examples:\n\
                    hackboard stats                  # Total time and language breakdown\n\
                    hackboard progress               # Cookies earned and target progress\n\
                    hackboard progress --item \"Framework Laptop\" --country ca\n\
                    hackboard store                  # List purchasable items\n\
                    hackboard stats --from-file      # Use previously saved documents\n\
                  \n\
                  Environment Variables:\n\
                    HACKATIME_API_KEY                # Hackatime API key\n\
                    HACKATIME_USERNAME               # Hackatime username\n\
                    FT_API_KEY                       # Store API key (optional)\n\
                    HACKBOARD_CONFIG                 # Settings file path\n\
                    HACKBOARD_STORAGE_DIR            # Storage directory override"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to settings file (default: <config dir>/hackboard/config.json)
    #[arg(long, env = "HACKBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for saved stats/store documents
    #[arg(long, env = "HACKBOARD_STORAGE_DIR")]
    storage_dir: Option<PathBuf>,

    /// Read saved documents instead of calling the APIs
    #[arg(long)]
    from_file: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "HACKBOARD_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show tracked time and language breakdown (default)
    Stats,
    /// Show cookies earned and progress toward the target item
    Progress {
        /// Target item name (overrides settings)
        #[arg(long)]
        item: Option<String>,
        /// Country code for pricing (overrides settings)
        #[arg(long)]
        country: Option<String>,
    },
    /// List store items
    Store,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hackboard=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Settings::default_path()?,
    };
    let settings = Settings::load(&config_path);

    let storage_dir = match &cli.storage_dir {
        Some(dir) => dir.clone(),
        None => storage::default_storage_dir()?,
    };

    match cli.command.take().unwrap_or(Command::Stats) {
        Command::Stats => {
            let snapshot = load_stats(&cli, &settings, &storage_dir).await?;
            render::print_stats(&snapshot, cli.json, cli.no_color)?;
        }
        Command::Progress { item, country } => {
            let snapshot = load_stats(&cli, &settings, &storage_dir).await?;
            let catalog = load_catalog(&cli, &settings, &storage_dir).await;

            let cfg = settings.formula;
            let cookies_earned = compute_cookies(&snapshot, &cfg);

            let target = item.as_deref().or_else(|| settings.target_item());
            let country = country.unwrap_or_else(|| settings.country());
            let report = target.and_then(|name| {
                build_progress_report(&snapshot, &catalog, name, &country, &cfg)
            });

            render::print_progress(cookies_earned, report.as_ref(), cli.json)?;
        }
        Command::Store => {
            let source =
                store_source(&cli, &settings, &storage_dir).context("Store is not available")?;
            let items = fetch_with_spinner(cli.json, "Fetching store items...", source.fetch())
                .await
                .context("Failed to fetch store items")?;
            let catalog = Catalog::build(items);
            render::print_store(&catalog, &settings.country(), cli.json, cli.no_color)?;
        }
    }

    Ok(())
}

async fn fetch_with_spinner<T>(
    quiet: bool,
    msg: &str,
    fut: impl std::future::Future<Output = T>,
) -> T {
    if quiet {
        return fut.await;
    }
    let spinner = render::spinner(msg);
    let result = fut.await;
    spinner.finish_and_clear();
    result
}

/// Stats are critical: any failure here aborts the command
async fn load_stats(
    cli: &Cli,
    settings: &Settings,
    storage_dir: &std::path::Path,
) -> Result<StatsSnapshot> {
    let source = stats_source(cli, settings, storage_dir)?;
    fetch_with_spinner(cli.json, "Fetching stats from Hackatime...", source.fetch())
        .await
        .context("Failed to load stats")
}

/// The store degrades: failures produce an empty catalog and a warning
async fn load_catalog(cli: &Cli, settings: &Settings, storage_dir: &std::path::Path) -> Catalog {
    let source = match store_source(cli, settings, storage_dir) {
        Some(source) => source,
        None => {
            tracing::warn!("No store API key configured; continuing without store data");
            return Catalog::default();
        }
    };

    match fetch_with_spinner(cli.json, "Fetching store items...", source.fetch()).await {
        Ok(items) => Catalog::build(items),
        Err(e) => {
            tracing::warn!(error = %e, "Store fetch failed; continuing without store data");
            Catalog::default()
        }
    }
}

fn stats_source(
    cli: &Cli,
    settings: &Settings,
    storage_dir: &std::path::Path,
) -> Result<Box<dyn StatsSource>> {
    if cli.from_file {
        return Ok(Box::new(FileStatsSource::from_storage_dir(storage_dir)));
    }

    let (api_key, username) = settings.hackatime_credentials()?;
    let mut client = HackatimeClient::new(api_key, username)
        .with_text_fold(settings.fold_text_into_python)
        .with_persist_dir(storage_dir.to_path_buf());

    if let (Some(start), Some(end)) = (&settings.start_date, &settings.end_date) {
        client = client
            .with_window(start, end)
            .context("Invalid stats window in settings")?;
    }

    Ok(Box::new(client))
}

fn store_source(
    cli: &Cli,
    settings: &Settings,
    storage_dir: &std::path::Path,
) -> Option<Box<dyn StoreSource>> {
    if cli.from_file {
        return Some(Box::new(FileStoreSource::from_storage_dir(storage_dir)));
    }

    settings.store_api_key().map(|key| {
        Box::new(StoreClient::new(key).with_persist_dir(storage_dir.to_path_buf()))
            as Box<dyn StoreSource>
    })
}
