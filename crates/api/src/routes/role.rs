//! Route definitions for the `/roles` resource.
//!
//! Also nests the role-scoped resource routes under
//! `/roles/{role_id}/resources`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{resource, role};
use crate::state::AppState;

/// Routes mounted at `/roles`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{role_id}                 -> get_by_id
///
/// GET    /{role_id}/resources       -> resource::list_by_role
/// POST   /{role_id}/resources       -> resource::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(role::list).post(role::create))
        .route("/{role_id}", get(role::get_by_id))
        .route(
            "/{role_id}/resources",
            get(resource::list_by_role).post(resource::create),
        )
}
