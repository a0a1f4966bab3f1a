//! itemsvc CLI - entry point for the item HTTP service
//!
//! `itemsvc` with no subcommand behaves like `itemsvc serve`.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "itemsvc",
    author,
    version,
    about = "HTTP service for creating and listing items in PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (default)
    Serve(commands::serve::ServeArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Some(Commands::Serve(args)) => commands::run_serve(args).await?,
        None => commands::run_serve(commands::serve::ServeArgs::default()).await?,
    }

    Ok(())
}
