//! GitHub user finder CLI
//!
//! Runs the search pipeline once and prints the users as JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use user_finder::{
    error::{AppError, Result},
    models::Config,
    pipeline::SearchPipeline,
    services::build_query,
};

/// user-finder - GitHub user search with profile enrichment
#[derive(Parser, Debug)]
#[command(
    name = "user-finder",
    version,
    about = "Find GitHub users by login and language"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search users and print their profiles as JSON
    Search {
        /// Login (or part of it) to search for
        #[arg(short, long)]
        user: String,

        /// Preferred programming language
        #[arg(short, long, visible_alias = "lang")]
        language: Option<String>,
    },

    /// Print the search query without sending it
    Query {
        #[arg(short, long)]
        user: String,

        #[arg(short, long, visible_alias = "lang")]
        language: Option<String>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load(&cli.config);
    let level = loaded
        .as_ref()
        .map_or("info", |config| config.logging.level.as_str())
        .to_string();
    init_logging(cli.verbose, &level);

    let mut config = loaded.unwrap_or_else(|e| {
        log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        );
        Config::default()
    });

    if config.github.token.is_none() {
        config.github.token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
    }

    match cli.command {
        Command::Search { user, language } => {
            config.validate()?;
            let pipeline = SearchPipeline::from_config(&config.github)?;

            match pipeline.find_users(&user, language.as_deref()).await {
                Ok(users) => {
                    println!("{}", serde_json::to_string_pretty(&users)?);
                }
                Err(e) if e.is_rate_limited() => {
                    log::error!("GitHub API limit reached. Please, wait for reset ({e})");
                    return Err(AppError::from(e));
                }
                Err(e) => {
                    log::error!("Search failed [{}]: {}", e.http_status(), e);
                    return Err(AppError::from(e));
                }
            }
        }

        Command::Query { user, language } => {
            println!("{}", build_query(&user, language.as_deref())?);
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("Config OK (search endpoint: {})", config.github.search_url);
        }
    }

    Ok(())
}
