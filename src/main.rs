//! Address Book - Main entry point
//!
//! Runs a single command against the configured book file and prints the
//! result to stdout. Logs go to stderr.

use addressbook::cli::{self, Cli};
use addressbook::{Config, JsonFileStore};
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let book_path = cli.file.unwrap_or(config.book_path);
    info!("Using address book at {}", book_path.display());

    let store = JsonFileStore::new(book_path, config.phone_rules);

    let output = cli::run(&store, &cli.command)?;
    for line in output.lines {
        println!("{}", line);
    }
    Ok(())
}
