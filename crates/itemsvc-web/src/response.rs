//! Response encoding.
//!
//! Handler output is a [`Reply`]: a status code plus one of the closed set
//! of [`ApiBody`] shapes. Encoding is JSON; if serialization fails the
//! client gets a 500 with a plain-text body instead.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use itemsvc_store::Item;
use serde::Serialize;

/// Plain-text body sent when a payload cannot be serialized.
pub const ENCODING_FAILURE: &str = "Error encoding response";

/// Every body shape the item API can send.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiBody {
    /// A single item.
    Item(Item),
    /// A list of items.
    Items(Vec<Item>),
    /// A generic acknowledgement, e.g. `{"result": "success"}`.
    Outcome { result: &'static str },
    /// An error envelope.
    Error { error: String },
}

impl ApiBody {
    /// The acknowledgement returned by delete.
    pub fn success() -> Self {
        Self::Outcome { result: "success" }
    }
}

/// A terminal HTTP response: status plus body.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: ApiBody,
}

impl Reply {
    pub fn new(status: StatusCode, body: ApiBody) -> Self {
        Self { status, body }
    }

    /// 200 OK.
    pub fn ok(body: ApiBody) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// 201 Created.
    pub fn created(body: ApiBody) -> Self {
        Self::new(StatusCode::CREATED, body)
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        encode_json(self.status, &self.body)
    }
}

/// Serialize `payload` as the JSON body of a `status` response.
fn encode_json<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(bytes) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode response body");
            (StatusCode::INTERNAL_SERVER_ERROR, ENCODING_FAILURE).into_response()
        }
    }
}
