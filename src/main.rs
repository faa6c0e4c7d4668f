//! Address book assistant - Main entry point
//!
//! Loads the persisted book, runs the interactive command loop over stdin,
//! and saves the book back to disk on exit.

use addressbook::{storage, Config};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only, stdout belongs to the command loop)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

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

    info!("Loading address book from {}", config.book_file.display());
    let mut book = storage::load(&config.book_file)?;
    info!("Loaded {} contact(s)", book.len());

    // Run the command loop (blocks until close/exit or end of input)
    let stdin = io::stdin();
    addressbook::repl::run(&mut book, stdin.lock(), io::stdout())?;

    storage::save(&book, &config.book_file)?;
    info!("Address book saved to {}", config.book_file.display());

    Ok(())
}
