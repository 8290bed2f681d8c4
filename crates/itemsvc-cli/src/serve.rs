//! Subcommands: `itemsvc serve` and `itemsvc init`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use itemsvc_store::{Database, ItemStore};
use itemsvc_web::WebServer;

use crate::config::ServiceConfig;
use crate::helpers::{ensure_parent_dir, init_tracing};

/// Command-line values that override the config file and environment.
#[derive(Debug, Default)]
pub struct Overrides {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub db: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

impl Overrides {
    fn apply(self, config: &mut ServiceConfig) {
        if let Some(bind) = self.bind {
            config.server.bind = bind;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(db) = self.db {
            config.database.path = db;
        }
        if let Some(dir) = self.static_dir {
            config.server.static_dir = dir;
        }
    }
}

/// Resolve the effective configuration: file, then env, then flags.
pub fn resolve_config(config_path: &Path, overrides: Overrides) -> Result<ServiceConfig> {
    let mut config = ServiceConfig::load(config_path)?;
    config.apply_process_env()?;
    overrides.apply(&mut config);
    Ok(config)
}

/// Open the store at `path`, creating the file and table as needed.
async fn open_store(path: &Path) -> Result<Database> {
    ensure_parent_dir(path)?;
    let db = Database::open_and_init(path.to_path_buf())
        .await
        .with_context(|| format!("could not initialize database at {}", path.display()))?;
    info!(path = %path.display(), "store initialized");
    Ok(db)
}

/// Run the HTTP server until shutdown.
pub async fn cmd_serve(config_path: PathBuf, overrides: Overrides) -> Result<()> {
    let config = resolve_config(&config_path, overrides)?;
    init_tracing(&config.log.level);
    info!(config = %config_path.display(), "configuration loaded");

    let db = open_store(&config.database.path).await?;
    let server = WebServer::new(config.web_config(), Arc::new(ItemStore::new(db)));

    server
        .start()
        .await
        .with_context(|| format!("web server failed on {}", config.web_config().bind_addr))?;

    info!("shutting down");
    Ok(())
}

/// Initialize the store and exit.
pub async fn cmd_init(config_path: PathBuf, db: Option<PathBuf>) -> Result<()> {
    let config = resolve_config(
        &config_path,
        Overrides {
            db,
            ..Overrides::default()
        },
    )?;
    init_tracing(&config.log.level);

    let path = config.database.path;
    open_store(&path).await?;

    println!("  [+] Database initialized at {}", path.display());
    Ok(())
}
