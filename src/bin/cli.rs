//! sc-export CLI
//!
//! Exports a SensCritique collection to a Goodreads-compatible CSV file.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use sc_export::{
    config,
    error::Result,
    models::{CollectionKind, Config, ProfilePreset},
    pipeline,
    services::{HttpFetcher, throttle},
};

/// sc-export - SensCritique to Goodreads exporter
#[derive(Parser, Debug)]
#[command(
    name = "sc-export",
    version,
    about = "Export SensCritique comics and books to a Goodreads CSV"
)]
struct Cli {
    /// Path to the configuration file (default: ./sc-export.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl the collections and write the CSV
    Export {
        /// Output CSV path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Collection to export (comics, books); repeat for several
        #[arg(long = "collection")]
        collections: Vec<CollectionKind>,

        /// Item policy preset (standard, details-first)
        #[arg(long)]
        profile: Option<ProfilePreset>,

        /// SensCritique username
        #[arg(long)]
        username: Option<String>,

        /// Value of the authentication cookie
        #[arg(long)]
        cookie: Option<String>,

        /// Append Original Language and Summary columns
        #[arg(long)]
        extra_columns: bool,
    },

    /// Validate the configuration
    Validate,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Load the file configuration and apply environment overrides.
fn load(cli_config: Option<&PathBuf>) -> Result<Config> {
    let mut config = config::load_config(cli_config.map(PathBuf::as_path))?;
    config::apply_env_overrides(&mut config);
    Ok(config)
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Export {
            output,
            collections,
            profile,
            username,
            cookie,
            extra_columns,
        } => {
            let mut config = load(cli.config.as_ref())?;

            if let Some(output) = output {
                config.export.output = output.to_string_lossy().into_owned();
            }
            if !collections.is_empty() {
                config.export.collections = collections;
            }
            if let Some(profile) = profile {
                config.set_profile(profile);
            }
            if let Some(username) = username {
                config.account.username = username;
            }
            if let Some(cookie) = cookie {
                config.account.auth_cookie = cookie;
            }
            if extra_columns {
                config.export.extra_columns = true;
            }

            config.validate()?;
            let fetcher = Arc::new(HttpFetcher::new(&config)?);
            let throttle = throttle::from_delay_ms(config.crawler.request_delay_ms);

            let summary = pipeline::run_export(Arc::new(config), fetcher, throttle).await?;
            for (kind, count) in &summary.collections {
                log::info!("  - {}: {count}", kind.label());
            }
        }

        Command::Validate => {
            let config = load(cli.config.as_ref())?;
            pipeline::run_validate(&config)?;
            log::info!("All validations passed!");
        }

        Command::Init { force } => {
            let path = cli
                .config
                .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));
            config::write_template(&path, force)?;
            log::info!("Configuration template written to {}", path.display());
        }
    }

    Ok(())
}
