//! Custom Axum extractors.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use crate::error::ApiError;

/// The raw `id` query parameter of the singular item path.
///
/// Extraction never inspects the value; shape checks belong to
/// [`crate::ItemService`] so they run in the same order for every
/// operation.
#[derive(Debug, Clone, Default)]
pub struct IdParam(pub Option<String>);

impl IdParam {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<Vec<(String, String)>> =
            Query::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingId)?;

        // A repeated `id` resolves to its first occurrence.
        let id = params
            .into_iter()
            .find_map(|(key, value)| (key == "id").then_some(value));
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> Option<String> {
        let (mut parts, ()) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        IdParam::from_request_parts(&mut parts, &()).await.unwrap().0
    }

    #[tokio::test]
    async fn reads_id() {
        assert_eq!(extract("/item?id=12").await.as_deref(), Some("12"));
    }

    #[tokio::test]
    async fn repeated_id_keeps_first() {
        assert_eq!(extract("/item?id=1&id=2").await.as_deref(), Some("1"));
        assert_eq!(extract("/item?x=0&id=7&id=").await.as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn absent_id_is_none() {
        assert_eq!(extract("/item").await, None);
        assert_eq!(extract("/item?other=1").await, None);
    }

    #[tokio::test]
    async fn empty_id_is_kept_for_validation() {
        assert_eq!(extract("/item?id=").await.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn decodes_percent_escapes() {
        assert_eq!(extract("/item?id=%2042").await.as_deref(), Some(" 42"));
    }
}
