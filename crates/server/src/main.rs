//! Almanac
//!
//! Serves the science and scripture topic catalog over HTTP, or answers
//! catalog queries directly from the command line.

mod api;
mod cli;
mod config;
mod server;

use anyhow::Context;
use clap::{Parser, Subcommand};

use almanac_core::catalog::{BrowseRequest, CatalogIndex};

use crate::config::{init_tracing, ServerConfig};

#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Almanac - Science and Scripture Topic Catalog")]
struct Args {
    #[command(flatten)]
    config: ServerConfig,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
enum CliCommand {
    /// Start the Almanac server (default)
    Serve,
    /// List category tabs with their entry counts
    Categories,
    /// List entries for a category tab, or search titles across all of them
    Browse {
        /// Category tab to show ("All" when omitted)
        #[arg(short, long)]
        category: Option<String>,
        /// Case-insensitive title search; overrides the category when non-empty
        #[arg(short, long)]
        search: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the topic listed at a detail page url
    Show {
        /// Detail page url, e.g. /astronomy/sirius
        url: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_tracing(&args.config);

    let index = CatalogIndex::builtin().context("Failed to load the built-in catalog")?;

    match args.command.unwrap_or(CliCommand::Serve) {
        CliCommand::Serve => server::run_server(&args.config, index).await?,
        CliCommand::Categories => print!("{}", cli::render_categories(index)),
        CliCommand::Browse {
            category,
            search,
            json,
        } => {
            let request = BrowseRequest { category, search };
            println!("{}", cli::browse(index, &request, json)?.trim_end());
        }
        CliCommand::Show { url, json } => {
            println!("{}", cli::show(index, &url, json)?.trim_end());
        }
    }

    Ok(())
}
