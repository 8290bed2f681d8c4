//! HTTP interface for itemsvc.
//!
//! This crate exposes item CRUD over JSON:
//!
//! - [`ItemService`] validates requests and talks to the store.
//! - [`server::api_router`] maps method and path onto service operations.
//! - [`WebServer`] nests the API under a prefix, serves static assets for
//!   everything else, and runs the listener.

pub mod api;
pub mod error;
pub mod extract;
pub mod response;
pub mod server;
pub mod service;
pub mod state;

use std::path::PathBuf;

pub use error::ApiError;
pub use response::{ApiBody, Reply};
pub use server::WebServer;
pub use service::ItemService;
pub use state::AppState;

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// The address to bind the HTTP server to.
    pub bind_addr: String,
    /// The port to listen on.
    pub port: u16,
    /// Directory served for every path outside the API.
    pub static_dir: PathBuf,
    /// Path prefix the item routes are mounted under. Empty mounts them at
    /// the root.
    pub api_prefix: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".into(),
            port: 8080,
            static_dir: PathBuf::from("static"),
            api_prefix: "/api".into(),
        }
    }
}
