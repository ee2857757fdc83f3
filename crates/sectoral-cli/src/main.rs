//! Sectoral CLI - Command-line interface for sectoral GDP breakdowns.
//!
//! # Usage
//!
//! ```bash
//! # Full report for two snapshots
//! sectoral report --current gdp-2024.json --prior gdp-2023.json
//!
//! # Report as JSON with a custom configuration
//! sectoral --format json report --current gdp-2024.json --prior gdp-2023.json --config report.toml
//!
//! # Validation verdict only (exits non-zero when invalid)
//! sectoral validate --current gdp-2024.json --prior gdp-2023.json
//!
//! # List the sector registry
//! sectoral sectors
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "warn,sectoral=info";

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.quiet);

    let format = cli.format;

    match cli.command {
        Commands::Report(args) => commands::report::execute(args, format)?,
        Commands::Validate(args) => commands::validate::execute(args, format)?,
        Commands::Sectors(args) => commands::sectors::execute(args, format)?,
    }

    Ok(())
}

/// Logs go to stderr so JSON and CSV on stdout stay machine-readable.
fn init_tracing(quiet: bool) {
    let filter = if quiet {
        tracing_subscriber::EnvFilter::new("error")
    } else {
        tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
