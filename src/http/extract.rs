//! Path and query extractors whose rejections use the JSON error envelope

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::response::ApiError;
use crate::error::DocsError;

/// [`Path`] that rejects with a `path` validation error
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

/// [`Query`] that rejects with a `query_string` validation error
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError(DocsError::validation(
                "path",
                parts.uri.path(),
                rejection.body_text(),
                Vec::<String>::new(),
            ))),
        }
    }
}

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError(DocsError::validation(
                "query_string",
                parts.uri.query().unwrap_or_default(),
                rejection.body_text(),
                Vec::<String>::new(),
            ))),
        }
    }
}
