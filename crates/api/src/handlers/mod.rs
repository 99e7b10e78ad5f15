//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `careerpath_db`
//! and map errors via [`AppError`](crate::error::AppError).

pub mod catalog;
pub mod resource;
pub mod role;

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Fallback for unmatched paths under `/api/v1`.
pub async fn api_not_found(uri: Uri) -> AppError {
    AppError::NoRoute(uri.path().to_string())
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
