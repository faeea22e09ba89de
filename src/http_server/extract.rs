//! Request extractors shared by the resource routes.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, RawPathParams, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::api::{ApiError, RequestArgs};

/// Integer path identifiers.
///
/// Only unsigned decimal segments match. Anything else (including `-1` or
/// `+1`) means the route does not exist, so the rejection is a 404 rather
/// than axum's default 400.
#[derive(Debug)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = RawPathParams::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound("Not Found"))?;
        if let Some((name, value)) = raw.iter().find(|(_, value)| !is_unsigned(value)) {
            tracing::debug!(name, value, "path identifier is not an unsigned integer");
            return Err(ApiError::NotFound("Not Found"));
        }

        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(IdPath(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "path identifier rejected");
                Err(ApiError::NotFound("Not Found"))
            }
        }
    }
}

fn is_unsigned(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// JSON body arguments, accepted regardless of content type.
#[derive(Debug)]
pub struct Args(pub RequestArgs);

#[async_trait]
impl<S> FromRequest<S> for Args
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::MalformedBody)?;
        Ok(Args(RequestArgs::from_body(&body)?))
    }
}
