//! Service configuration.
//!
//! Values come from, in increasing priority: built-in defaults, the TOML
//! file (`config/default.toml` unless `--config` says otherwise),
//! `ITEMSVC_*` environment variables, and command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use itemsvc_web::WebConfig;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Top-level configuration, one field per TOML section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
    pub log: LogSection,
}

/// `[server]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub api_prefix: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        let web = WebConfig::default();
        Self {
            bind: web.bind_addr,
            port: web.port,
            static_dir: web.static_dir,
            api_prefix: web.api_prefix,
        }
    }
}

/// `[database]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub path: PathBuf,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/items.db"),
        }
    }
}

/// `[log]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl ServiceConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Parse a TOML document. Absent sections and keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `ITEMSVC_*` overrides from the process environment.
    pub fn apply_process_env(&mut self) -> Result<()> {
        self.apply_env(|key| std::env::var(key).ok())
    }

    /// Apply `ITEMSVC_*` overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("ITEMSVC_BIND") {
            self.server.bind = bind;
        }
        if let Some(port) = lookup("ITEMSVC_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("ITEMSVC_PORT is not a valid port: {port}"))?;
        }
        if let Some(dir) = lookup("ITEMSVC_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }
        if let Some(path) = lookup("ITEMSVC_DB_PATH") {
            self.database.path = PathBuf::from(path);
        }
        if let Some(level) = lookup("ITEMSVC_LOG_LEVEL") {
            self.log.level = level;
        }
        Ok(())
    }

    /// The web server's view of this configuration.
    pub fn web_config(&self) -> WebConfig {
        WebConfig {
            bind_addr: self.server.bind.clone(),
            port: self.server.port,
            static_dir: self.server.static_dir.clone(),
            api_prefix: self.server.api_prefix.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.api_prefix, "/api");
        assert_eq!(config.database.path, PathBuf::from("data/items.db"));
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ServiceConfig::from_toml_str(
            r#"
            [server]
            port = 3000

            [database]
            path = "/var/lib/itemsvc/items.db"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.database.path, PathBuf::from("/var/lib/itemsvc/items.db"));
        assert_eq!(config.log, LogSection::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(ServiceConfig::from_toml_str("[server\nport = ").is_err());
        assert!(ServiceConfig::from_toml_str("[server]\nport = \"eighty\"").is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServiceConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        std::fs::write(&path, "[log]\nlevel = \"debug\"\n").unwrap();

        let config = ServiceConfig::load(&path).unwrap();
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn env_overrides_file() {
        let vars: HashMap<&str, &str> = [
            ("ITEMSVC_BIND", "0.0.0.0"),
            ("ITEMSVC_PORT", "9999"),
            ("ITEMSVC_DB_PATH", "/tmp/env.db"),
        ]
        .into_iter()
        .collect();

        let mut config = ServiceConfig::from_toml_str("[server]\nport = 3000\n").unwrap();
        config
            .apply_env(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.database.path, PathBuf::from("/tmp/env.db"));
        assert_eq!(config.server.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn bad_env_port_is_an_error() {
        let mut config = ServiceConfig::default();
        let result = config.apply_env(|key| (key == "ITEMSVC_PORT").then(|| "http".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn web_config_mirrors_server_section() {
        let mut config = ServiceConfig::default();
        config.server.port = 1234;
        config.server.api_prefix = String::new();

        let web = config.web_config();
        assert_eq!(web.port, 1234);
        assert_eq!(web.api_prefix, "");
        assert_eq!(web.bind_addr, "127.0.0.1");
    }
}
