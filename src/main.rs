//! bookbot - Main entry point
//!
//! Starts the interactive assistant: logging to stderr (stdout belongs to
//! the conversation), configuration from the environment, then the
//! read-dispatch-print loop until `close`/`exit`.

use anyhow::Result;
use bookbot::{AddressBook, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to keep stdout clean for replies)
    let fallback_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        horizon_days = config.horizon_days,
        "Starting assistant session"
    );

    let mut book = AddressBook::new();
    bookbot::repl::run(&mut book, &config)?;

    info!(contacts = book.len(), "Assistant session complete");
    Ok(())
}
