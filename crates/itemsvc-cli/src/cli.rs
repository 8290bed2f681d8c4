//! CLI argument definitions for itemsvc.
//!
//! All `clap` structures live here so that `main.rs` stays focused on
//! dispatching subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

/// itemsvc -- a small item record service.
#[derive(Parser)]
#[command(
    name = "itemsvc",
    version,
    about = "itemsvc -- item record service over HTTP",
    long_about = "Create, read, update and delete items stored in SQLite through a JSON \
                  HTTP API."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Path to the TOML configuration file.
        #[arg(long, short, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Address to bind the HTTP server to.
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on.
        #[arg(long, short)]
        port: Option<u16>,

        /// SQLite database file.
        #[arg(long)]
        db: Option<PathBuf>,

        /// Directory served for non-API paths.
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Create the database file and items table, then exit.
    Init {
        /// Path to the TOML configuration file.
        #[arg(long, short, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// SQLite database file.
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Run the interactive task list.
    Tasks,
}
