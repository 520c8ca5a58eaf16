//! gridstore command-line client
//!
//! Loads, filters and edits records of a Django REST collection using the
//! same request translation a data grid uses.
//!
//! Usage:
//!   gridstore --url http://localhost:8000/api/contacts load --take 20 --sort name,-age
//!   gridstore get 42
//!   gridstore validate --vat DE123456789012

use anyhow::Result;
use clap::Parser;
use gridstore_cli::{Cli, run};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let stdout = std::io::stdout();
    let all_valid = run(&cli, &mut stdout.lock()).await?;

    Ok(if all_valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
