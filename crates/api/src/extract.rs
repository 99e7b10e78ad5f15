//! Request extractors whose rejections use the JSON error envelope.
//!
//! Axum's stock `Json`, `Path` and `Query` extractors reject with plain-text
//! bodies. These wrappers route every rejection through [`AppError`] so the
//! frontend only ever has to parse one error shape.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// `Path<T>` with a JSON `BAD_REQUEST` rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// `Query<T>` with a JSON `BAD_REQUEST` rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// A JSON body that has been deserialized and then validated.
///
/// Malformed JSON rejects with `BAD_REQUEST`; a well-formed body that fails
/// its `validator` rules rejects with `VALIDATION_ERROR` and per-field
/// details.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}
