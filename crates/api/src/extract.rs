//! Extractors that reject with the JSON error envelope.
//!
//! axum's own `Path` and `Json` rejections answer in plain text. These
//! wrappers turn them into [`AppError::BadRequest`] so every error a client
//! sees has the `{error, code}` shape.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use coffeehub_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Numeric `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct IdParam(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for IdParam {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected path id");
                AppError::BadRequest("Invalid id".into())
            })?;
        Ok(IdParam(id))
    }
}

/// JSON request body.
///
/// Malformed JSON, a wrong content type, or a body of the wrong shape are
/// all reported as 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(JsonBody(value))
    }
}
