//! CLI entry point for itemsvc.
//!
//! This binary provides the `itemsvc` command with subcommands for serving
//! the item API, initializing the store, and running the task list.

mod cli;
mod config;
mod helpers;
mod serve;
mod tasks;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::serve::Overrides;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is not an error.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            bind,
            port,
            db,
            static_dir,
        } => {
            serve::cmd_serve(
                config,
                Overrides {
                    bind,
                    port,
                    db,
                    static_dir,
                },
            )
            .await
        }
        Commands::Init { config, db } => serve::cmd_init(config, db).await,
        Commands::Tasks => tasks::cmd_tasks(),
    }
}
