//! Shared application state for the web server.
//!
//! [`AppState`] is wrapped in an `Arc` and shared across all request
//! handlers. It holds no locks; the store handle inside the service does
//! its own synchronization.

use std::sync::Arc;

use itemsvc_store::ItemRepository;

use crate::service::ItemService;

/// Shared state accessible from every Axum handler.
#[derive(Clone)]
pub struct AppState {
    /// Item operations, backed by the injected repository.
    pub items: ItemService,
}

impl AppState {
    /// Build state around any [`ItemRepository`].
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self {
            items: ItemService::new(repo),
        }
    }
}
