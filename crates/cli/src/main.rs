//! ribbonboard CLI — the main entry point.
//!
//! Commands:
//! - `collapse` — Show the worn ribbon list for a set of award codes
//! - `ribbon`   — Render one ribbon as SVG
//! - `board`    — Render a ribbon board page for a set of award codes
//! - `records`  — Render boards for everyone in a records file
//! - `catalog`  — List, validate or tabulate the ribbon catalog
//! - `variants` — Write every visually distinct device variant of a ribbon
//! - `config`   — Show, locate, validate or create the config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "ribbonboard",
    about = "ribbonboard — decoration ribbons and ribbon boards as SVG",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Collapse award codes into the list of ribbons actually worn
    Collapse {
        /// Award codes, in any order, repeats allowed
        #[arg(required = true)]
        codes: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Render a single ribbon as a standalone SVG
    Ribbon {
        /// Award code
        code: String,

        /// Number of awards (controls devices)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render an HTML page with the board for a set of award codes
    Board {
        #[arg(required = true)]
        codes: Vec<String>,

        /// Page title
        #[arg(long, default_value = "Ribbon Board")]
        title: String,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render an HTML page of boards for a records file
    Records {
        /// Records file (defaults to `records_path` from the config)
        file: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect the ribbon catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Write one SVG per visually distinct award count of a ribbon
    Variants {
        code: String,

        /// Highest award count to consider
        #[arg(long)]
        max: Option<u32>,

        /// Directory to write into (defaults to `output_dir` from the config)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List ribbons in order of precedence
    List,
    /// Build and validate the catalog, including any configured overlay
    Validate,
    /// Render the catalog as an HTML table
    Table {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Validate the config file
    Validate,
    /// Write a default config file if none exists
    Init,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Collapse { codes, json } => commands::collapse::run(codes, json).await?,
        Commands::Ribbon {
            code,
            count,
            output,
        } => commands::ribbon::run(code, count, output).await?,
        Commands::Board {
            codes,
            title,
            output,
        } => commands::board::run(codes, title, output).await?,
        Commands::Records { file, output } => commands::records::run(file, output).await?,
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list().await?,
            CatalogAction::Validate => commands::catalog::validate().await?,
            CatalogAction::Table { output } => commands::catalog::table(output).await?,
        },
        Commands::Variants { code, max, dir } => commands::variants::run(code, max, dir).await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
            ConfigAction::Validate => commands::config_cmd::validate().await?,
            ConfigAction::Init => commands::config_cmd::init().await?,
        },
    }

    Ok(())
}
