//! Finboard CLI
//!
//! Command-line front end for the financial dashboard:
//! - Show the dashboard in the terminal (table, json, csv)
//! - Export it as a static HTML page
//! - Run the companion API server
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};

use finboard::api::{self, AppState, TransactionStore};
use finboard::client::FinancesClient;
use finboard::config::{generate_default_config, Config};
use finboard::dashboard::{Dashboard, StaticFeed, TransactionFeed};
use finboard::logging::{init_logging, with_startup_logging};
use finboard::render::{csv, html, text};

#[derive(Parser)]
#[command(name = "finboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Financial dashboard: transactions, balance cards and a table")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Transactions API base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the dashboard once and print it
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Disable colours
        #[arg(long)]
        no_color: bool,
        /// Read a saved GET /transactions body instead of calling the API
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Load the dashboard once and write it as a static HTML page
    Html {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Read a saved GET /transactions body instead of calling the API
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Run the companion API server
    Serve {
        /// JSON fixture to serve (default: built-in demo data)
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Host to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => with_startup_logging(Config::load_default),
    };
    if let Some(url) = cli.api_url {
        config.api.url = url;
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::Show {
            format,
            no_color,
            input,
        } => {
            let dashboard = mount(&config, input.as_deref()).await?;
            let color = config.display.color && !no_color;

            let out = match format {
                OutputFormat::Table => text::render(&dashboard, &text::TextOptions { color }),
                OutputFormat::Json => {
                    serde_json::to_string_pretty(&dashboard.snapshot())? + "\n"
                }
                OutputFormat::Csv => csv::render(&dashboard)?,
            };
            print!("{}", out);
        }

        Commands::Html { output, input } => {
            let dashboard = mount(&config, input.as_deref()).await?;
            let page = html::render_page(&dashboard);
            write_output(output.as_deref(), &page)?;
        }

        Commands::Serve {
            fixture,
            host,
            port,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let fixture = fixture.or_else(|| config.server.fixture.as_ref().map(PathBuf::from));

            let store = TransactionStore::load(fixture.as_deref())?;
            let api_config = config.server.api_config();
            api::serve(AppState::new(store, api_config.clone()), &api_config).await?;
        }

        Commands::Config { output } => {
            write_output(output.as_deref(), &generate_default_config())?;
        }
    }

    Ok(())
}

/// Build the feed for this run and perform the single mount-time fetch
async fn mount(config: &Config, input: Option<&Path>) -> anyhow::Result<Dashboard> {
    let feed: Box<dyn TransactionFeed> = match input {
        Some(path) => Box::new(
            StaticFeed::from_file(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        ),
        None => {
            tracing::info!(url = %config.api.url, "Loading dashboard");
            Box::new(FinancesClient::new(config.api.client_config())?)
        }
    };

    Ok(Dashboard::mount(feed.as_ref()).await)
}

fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            std::io::stdout().write_all(content.as_bytes())?;
        }
    }
    Ok(())
}
