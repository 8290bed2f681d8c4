//! REST API route handlers.
//!
//! Each handler pulls the raw inputs out of the request and hands them to
//! [`ItemService`](crate::ItemService). Handlers never inspect the inputs
//! themselves.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::extract::IdParam;
use crate::service::ServiceResult;
use crate::state::AppState;

fn respond(result: ServiceResult) -> Response {
    match result {
        Ok(reply) => reply.into_response(),
        Err(e) => e.into_response(),
    }
}

// ---------------------------------------------------------------------------
// Collection path
// ---------------------------------------------------------------------------

/// GET /items: List all items.
pub async fn list_items(State(state): State<Arc<AppState>>) -> Response {
    respond(state.items.list().await)
}

/// POST /items: Create an item from `{name, value}`.
pub async fn create_item(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    respond(state.items.create(&body).await)
}

// ---------------------------------------------------------------------------
// Singular path (`?id=N`)
// ---------------------------------------------------------------------------

/// GET /item?id=N: Fetch one item.
pub async fn get_item(State(state): State<Arc<AppState>>, id: IdParam) -> Response {
    respond(state.items.get(id.as_deref()).await)
}

/// PUT /item?id=N: Replace an item's name and value.
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    id: IdParam,
    body: Bytes,
) -> Response {
    respond(state.items.update(id.as_deref(), &body).await)
}

/// DELETE /item?id=N: Remove an item.
pub async fn delete_item(State(state): State<Arc<AppState>>, id: IdParam) -> Response {
    respond(state.items.delete(id.as_deref()).await)
}

// ---------------------------------------------------------------------------
// Fallbacks
// ---------------------------------------------------------------------------

/// Any unsupported method on an item path.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
