//! openarch CLI - Command-line interface
//!
//! Usage:
//!   openarch search <name> --after <year> --before <year> --relation <type>
//!   openarch row <url>
//!   openarch graph <url>
//!   openarch harvest <name> --after <year> --before <year> --relation <type>

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use openarch_client::ArchiveClient;
use openarch_core::{ArchiveConfig, FetchOutcome, LoggingConfig, RawDocument};
use openarch_extractor::{DocumentExtractor, GraphExtractor, RowExtractor};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "openarch")]
#[command(about = "Harvest openarch.nl records as rows or civil-registration graphs")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search records and print their URLs
    Search(SearchArgs),
    /// Fetch one record and print it as a flat row
    Row {
        /// Record URL or archive:identifier pair
        url: String,
    },
    /// Fetch one record and print its graph
    Graph {
        /// Record URL or archive:identifier pair
        url: String,
    },
    /// Search, fetch every hit and print the merged graph
    Harvest(SearchArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// Name to search for (pre-encoded for use in a query string)
    name: String,
    /// First year of the period
    #[arg(long)]
    after: i32,
    /// Last year of the period
    #[arg(long)]
    before: i32,
    /// Relation type filter, e.g. Bruid or Overledene
    #[arg(long)]
    relation: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.logging);

    let client = ArchiveClient::from_config(&config.api)?;

    match cli.command {
        Commands::Search(args) => {
            let urls = client
                .search(&args.name, args.before, args.after, &args.relation)
                .await?;
            print_json(&urls)?;
        }
        Commands::Row { url } => {
            let doc = fetch_document(&client, &url).await?;
            let row = RowExtractor.extract(&doc, &url)?;
            print_json(&row)?;
        }
        Commands::Graph { url } => {
            let doc = fetch_document(&client, &url).await?;
            let graph = GraphExtractor::from_config(&config).extract(&doc, &url)?;
            print_json(&graph)?;
        }
        Commands::Harvest(args) => {
            let extractor = GraphExtractor::from_config(&config);
            let report = client
                .harvest(
                    &extractor,
                    &args.name,
                    args.before,
                    args.after,
                    &args.relation,
                )
                .await
                .context("harvest failed")?;
            print_json(&report)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<ArchiveConfig> {
    let config = match path {
        Some(path) => ArchiveConfig::from_file(path)?.with_env_override()?,
        None => ArchiveConfig::from_env()?,
    };
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("openarch={}", logging.level).into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json_format {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn fetch_document(client: &ArchiveClient, url: &str) -> anyhow::Result<RawDocument> {
    match client.fetch(url).await? {
        FetchOutcome::Document(doc) => Ok(doc),
        FetchOutcome::ApiError(error) => {
            anyhow::bail!("archive returned an error for {url}: {}", error.description)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
