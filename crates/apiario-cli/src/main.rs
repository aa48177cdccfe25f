//! Apiario CLI Application
//!
//! Interactive console and one-shot commands for the apiary records database.

mod args;
mod cli;
mod logging;
mod menu;
mod renderer;

use std::io;

use anyhow::{Context, Result};
use apiario_core::Database;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::{error, info};
use menu::Menu;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    // A missing .env file is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    let Args {
        connection,
        log_file,
        no_color,
        command,
    } = Args::parse();

    logging::init(&log_file)?;

    let config = connection.into_config();
    let mut db = Database::connect(&config)
        .with_context(|| format!("Failed to connect to {config}"))?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Apiario started");

    let result = match command {
        Some(Commands::Check) => Cli::new(&mut db, &renderer).check(&config),
        Some(Commands::Summary) => Cli::new(&mut db, &renderer).summary(),
        Some(Commands::Load { table, file }) => Cli::new(&mut db, &renderer).load(table, &file),
        None => {
            let stdin = io::stdin();
            Menu::new(&mut db, &renderer, stdin.lock(), io::stdout()).run()
        }
    };

    if let Err(e) = &result {
        error!("Unexpected error: {e:#}");
    }

    let closed = db.disconnect().context("Failed to close the database");
    result?;
    closed
}
