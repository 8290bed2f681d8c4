//! Router assembly and server startup.
//!
//! [`api_router`] maps `(method, path)` onto item operations. [`WebServer`]
//! mounts it under the configured prefix, sends every other path to the
//! static-asset directory, and runs the listener until Ctrl+C or SIGTERM.

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use itemsvc_store::ItemRepository;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::WebConfig;
use crate::api;
use crate::state::AppState;

/// Collection path: list and create.
pub const ITEMS_PATH: &str = "/items";

/// Singular path: get, update and delete by `?id=`.
pub const ITEM_PATH: &str = "/item";

/// Build the item routes with `state` applied.
///
/// Unsupported methods on either path answer 405 with the JSON error
/// envelope. HEAD is registered explicitly so it does not fall through to
/// the GET handlers.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            ITEMS_PATH,
            get(api::list_items)
                .head(api::method_not_allowed)
                .post(api::create_item)
                .fallback(api::method_not_allowed),
        )
        .route(
            ITEM_PATH,
            get(api::get_item)
                .head(api::method_not_allowed)
                .put(api::update_item)
                .delete(api::delete_item)
                .fallback(api::method_not_allowed),
        )
        .with_state(state)
}

/// The itemsvc HTTP server.
pub struct WebServer {
    config: WebConfig,
    state: Arc<AppState>,
}

impl WebServer {
    /// Create a new web server around an injected repository.
    pub fn new(config: WebConfig, repo: Arc<dyn ItemRepository>) -> Self {
        let state = Arc::new(AppState::new(repo));
        Self { config, state }
    }

    /// Return the `host:port` string this server will bind to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.bind_addr, self.config.port)
    }

    /// Build the full router: API under the prefix, static assets elsewhere.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any);

        let api = api_router(Arc::clone(&self.state));
        let prefix = normalize_prefix(&self.config.api_prefix);
        let router = match prefix {
            Some(prefix) => Router::new().nest(&prefix, api),
            None => Router::new().merge(api),
        };

        router
            .fallback_service(ServeDir::new(&self.config.static_dir))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server and block until it is shut down.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot be bound or the server
    /// fails while running.
    pub async fn start(self) -> std::io::Result<()> {
        let addr = self.addr();
        let router = self.router();

        tracing::info!(
            addr = %addr,
            prefix = %self.config.api_prefix,
            static_dir = %self.config.static_dir.display(),
            "starting web server"
        );

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("web server stopped");
        Ok(())
    }
}

/// Turn a configured prefix into a nest path, or `None` for the root.
fn normalize_prefix(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('/') {
        Some(trimmed.to_owned())
    } else {
        Some(format!("/{trimmed}"))
    }
}

/// Resolve on Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::warn!("received SIGTERM, shutting down"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_normalization() {
        assert_eq!(normalize_prefix("/api"), Some("/api".to_owned()));
        assert_eq!(normalize_prefix("api/"), Some("/api".to_owned()));
        assert_eq!(normalize_prefix("/v1/api/"), Some("/v1/api".to_owned()));
        assert_eq!(normalize_prefix(""), None);
        assert_eq!(normalize_prefix("/"), None);
    }

    #[test]
    fn addr_formatting() {
        let db = itemsvc_store::Database::open_in_memory().unwrap();
        let repo = Arc::new(itemsvc_store::ItemStore::new(db));
        let server = WebServer::new(
            WebConfig {
                bind_addr: "0.0.0.0".into(),
                port: 9000,
                ..WebConfig::default()
            },
            repo,
        );
        assert_eq!(server.addr(), "0.0.0.0:9000");
    }
}
