mod commands;
mod config;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use swapi_search::CharacterSource;
use swapi_search_http::SwapiClient;
use swapi_search_tui::TuiOptions;
use tokio::time::Duration;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "swapi-search")]
#[command(about = "Search Star Wars characters from the terminal")]
struct Cli {
    /// Catalog API root (overrides the config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Path to the config file (defaults to ~/.config/swapi-search/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Launch the interactive search browser (default)
    Tui,
    /// Search once and print the matching characters
    Search {
        /// Character name, or part of one
        query: String,
        /// Print the raw records as JSON
        #[arg(long)]
        json: bool,
    },
}

fn build_client(cli: &Cli, config: &AppConfig) -> SwapiClient {
    let base_url = cli.base_url.clone().or_else(|| config.base_url.clone());
    SwapiClient::new(base_url)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref());
    let client = build_client(&cli, &config);

    match cli.command {
        Some(Command::Search { query, json }) => {
            logging::init_stderr();
            commands::search::run(&client, &query, json).await
        }
        Some(Command::Tui) | None => {
            logging::init_file(config.log_file.as_deref())?;
            tracing::info!(base_url = client.label(), "starting search browser");

            let source: Arc<dyn CharacterSource> = Arc::new(client);
            let options = TuiOptions {
                quiet_period: Duration::from_millis(config.debounce_ms),
            };
            swapi_search_tui::run(source, options).await
        }
    }
}
