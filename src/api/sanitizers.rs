//! Request extractors that validate and normalize untrusted input before a
//! handler runs. A rejected request never reaches the handler.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    Form, Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    error::{escape, AppError},
    models::{BookDetailsRequest, BookId},
};

#[derive(Deserialize)]
struct IdQuery {
    id: Option<String>,
}

/// Book identifier taken from the `id` query parameter
#[derive(Debug, Clone, Copy)]
pub struct SanitizedId(pub BookId);

#[async_trait]
impl<S> FromRequestParts<S> for SanitizedId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<IdQuery>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidId)?;

        query
            .id
            .as_deref()
            .and_then(BookId::parse)
            .map(SanitizedId)
            .ok_or(AppError::InvalidId)
    }
}

/// Book creation fields, trimmed, HTML-escaped and length-checked.
/// Accepts form-encoded and JSON bodies.
#[derive(Debug, Clone)]
pub struct SanitizedBookDetails(pub BookDetailsRequest);

impl SanitizedBookDetails {
    fn sanitize(details: BookDetailsRequest) -> Result<Self, AppError> {
        // Lengths apply to the escaped text, which is what gets stored
        let details = details.trimmed().map_fields(escape);
        details.validate().map_err(|e| {
            tracing::debug!("Rejected book details: {}", e);
            AppError::InvalidInputs
        })?;
        Ok(Self(details))
    }
}

#[async_trait]
impl<S> FromRequest<S> for SanitizedBookDetails
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        let details = if is_json {
            Json::<BookDetailsRequest>::from_request(req, state)
                .await
                .map(|Json(details)| details)
                .map_err(|e| {
                    tracing::debug!("Malformed JSON book details: {}", e);
                    AppError::InvalidInputs
                })?
        } else {
            Form::<BookDetailsRequest>::from_request(req, state)
                .await
                .map(|Form(details)| details)
                .map_err(|e| {
                    tracing::debug!("Malformed form book details: {}", e);
                    AppError::InvalidInputs
                })?
        };

        Self::sanitize(details)
    }
}
