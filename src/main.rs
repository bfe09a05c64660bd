//! otx-sync CLI
//!
//! Pulls paginated threat-intel pulses from the OTX API and upserts
//! them into MongoDB. Configuration comes from the environment (or a
//! `.env` file); see `Config` for the variables.

use clap::{Parser, Subcommand};
use otx_sync::{
    config::Config,
    error::Result,
    pipeline,
    services::PulseFetcher,
    storage::{MemoryStore, MongoStore},
};

/// otx-sync - OTX Pulse Sync Connector
#[derive(Parser, Debug)]
#[command(
    name = "otx-sync",
    version,
    about = "Syncs OTX threat-intel pulses into MongoDB"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pull all pages from the API and upsert them into the store
    Sync {
        /// Write to an in-memory store instead of MongoDB
        #[arg(long)]
        dry_run: bool,

        /// Stop after this many pages (default: run to end-of-data)
        #[arg(long)]
        max_pages: Option<u32>,
    },

    /// Load configuration and print the resolved parameters
    Check,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::from_env()?;

    match cli.command {
        Command::Sync { dry_run, max_pages } => {
            let fetcher = PulseFetcher::new(&config)?;

            let report = if dry_run {
                log::info!("Dry run: writes go to an in-memory store.");
                let store = MemoryStore::new();
                let report = pipeline::run_sync(&fetcher, &store, max_pages).await;
                log::info!(
                    "Dry run: {} documents would have been written to {}.{}.",
                    store.len(),
                    config.db_name,
                    config.collection_name
                );
                report
            } else {
                let store = MongoStore::connect(&config).await?;
                pipeline::run_sync(&fetcher, &store, max_pages).await
            };

            log::info!(
                "Pages fetched: {}, pulses upserted: {}, store failures: {}",
                report.pages_fetched,
                report.pulses_upserted,
                report.store_failures
            );
            // Both terminal states exit normally; the status line above
            // already said which one this was.
        }

        Command::Check => {
            log::info!("API endpoint: {}", config.base_url);
            log::info!(
                "API key: {}",
                if config.api_key.is_empty() {
                    "(empty)"
                } else {
                    "set"
                }
            );
            log::info!("Target: {}.{}", config.db_name, config.collection_name);
            log::info!("Page limit: {}", config.page_limit);
            log::info!(
                "Modified since: {}",
                config.modified_since.as_deref().unwrap_or("(unset)")
            );
            log::info!("HTTP timeout: {}s", config.timeout_secs);
            log::info!("Configuration OK.");
        }
    }

    Ok(())
}
