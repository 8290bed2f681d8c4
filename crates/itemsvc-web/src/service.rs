//! Item service: request validation and store orchestration.
//!
//! Validation is staged. The identifier is checked first, then the body,
//! and only then is the repository called, so the store never sees bad
//! input. Each operation makes at most one repository call.

use std::sync::Arc;

use itemsvc_store::{ItemRepository, NewItem};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::response::{ApiBody, Reply};

/// Result of a service operation: a reply to send, or an error to render.
pub type ServiceResult = Result<Reply, ApiError>;

/// Item operations over an injected [`ItemRepository`].
#[derive(Clone)]
pub struct ItemService {
    repo: Arc<dyn ItemRepository>,
}

impl ItemService {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }

    /// Every stored item. An empty store yields an empty list.
    pub async fn list(&self) -> ServiceResult {
        let items = self.repo.list().await?;
        debug!(count = items.len(), "listed items");
        Ok(Reply::ok(ApiBody::Items(items)))
    }

    /// One item by `id`.
    pub async fn get(&self, id: Option<&str>) -> ServiceResult {
        let id = parse_id(id)?;
        let item = self.repo.get(id).await?;
        Ok(Reply::ok(ApiBody::Item(item)))
    }

    /// Decode `{name, value}` from `body` and persist it.
    pub async fn create(&self, body: &[u8]) -> ServiceResult {
        let new_item = decode_new_item(body)?;
        let item = self.repo.insert(new_item).await?;
        info!(item_id = item.id, "item created");
        Ok(Reply::created(ApiBody::Item(item)))
    }

    /// Overwrite `name` and `value` of item `id`.
    ///
    /// An `id` that matches no row is reported as not found.
    pub async fn update(&self, id: Option<&str>, body: &[u8]) -> ServiceResult {
        let id = parse_id(id)?;
        let new_item = decode_new_item(body)?;
        if !self.repo.update(id, new_item.clone()).await? {
            return Err(ApiError::NotFound);
        }
        info!(item_id = id, "item updated");
        Ok(Reply::ok(ApiBody::Item(new_item.with_id(id))))
    }

    /// Remove item `id`. Succeeds whether or not the item existed.
    pub async fn delete(&self, id: Option<&str>) -> ServiceResult {
        let id = parse_id(id)?;
        if self.repo.delete(id).await? {
            info!(item_id = id, "item deleted");
        } else {
            debug!(item_id = id, "delete matched no item");
        }
        Ok(Reply::ok(ApiBody::success()))
    }
}

/// Validate the raw `id` query parameter.
fn parse_id(raw: Option<&str>) -> Result<i64, ApiError> {
    match raw {
        None | Some("") => Err(ApiError::MissingId),
        Some(raw) => raw.parse().map_err(|_| ApiError::InvalidId),
    }
}

/// Decode a request body into the mutable item fields.
fn decode_new_item(body: &[u8]) -> Result<NewItem, ApiError> {
    let item: NewItem = serde_json::from_slice(body).map_err(ApiError::InvalidPayload)?;
    if item.name.is_empty() {
        return Err(ApiError::Validation("Item name must not be empty".into()));
    }
    Ok(item)
}

// ── tests ────────────────────────────────────────────────────────────
