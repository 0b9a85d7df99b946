//! Google Scholar MCP Server - Entry Point
//!
//! Runs either as an MCP stdio server (for Claude Desktop) or as a
//! command-line search client.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use google_scholar_mcp::config::{Config, resolve_key};
use google_scholar_mcp::server::McpServer;
use google_scholar_mcp::{ScholarClient, formatters};

#[derive(Parser, Debug)]
#[command(name = "google-scholar-mcp")]
#[command(about = "Google Scholar search via SerpAPI: MCP server and CLI")]
#[command(version)]
struct Cli {
    /// SerpAPI key (falls back to the SERPAPI_KEY environment variable,
    /// then a .env file in the working directory)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the MCP server on stdio (for Claude Desktop)
    Serve,

    /// Search for papers
    Search {
        /// Search query
        query: String,

        /// Number of results (1-20)
        #[arg(long, short = 'n', default_value = "10")]
        num: u32,

        /// Filter papers published from this year
        #[arg(long)]
        year_from: Option<i32>,

        /// Filter papers published until this year
        #[arg(long)]
        year_to: Option<i32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search for an author
    Author {
        /// Author name
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get an author profile by id
    Profile {
        /// Google Scholar author id
        author_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get papers citing a given paper
    Citations {
        /// Citation id from search results
        citation_id: String,

        /// Number of results (1-20)
        #[arg(long, short = 'n', default_value = "10")]
        num: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // stderr only: stdout carries JSON-RPC frames in serve mode and
    // user-facing output otherwise.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    let api_key = resolve_key(cli.api_key.as_deref())?;
    let client = ScholarClient::new(Config::new(api_key))?;

    match cli.command {
        Commands::Serve => {
            tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Google Scholar MCP server");
            McpServer::new(client).run_stdio().await?;
        }
        Commands::Search { query, num, year_from, year_to, json } => {
            let result = client.search_scholar(&query, year_from, year_to, num).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", formatters::format_search_text(&result));
            }
        }
        Commands::Author { name, json } => {
            let profiles = client.search_author(&name).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&profiles)?);
            } else {
                println!("{}", formatters::format_author_matches_text(&name, &profiles));
            }
        }
        Commands::Profile { author_id, json } => {
            let profile = client.get_author_profile(&author_id).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                println!("{}", formatters::format_profile_text(&profile));
            }
        }
        Commands::Citations { citation_id, num, json } => {
            let result = client.get_paper_citations(&citation_id, num).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", formatters::format_citations_text(&result));
            }
        }
    }

    Ok(())
}
