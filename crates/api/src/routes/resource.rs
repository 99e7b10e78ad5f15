//! Route definitions for the `/resources` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/resources`.
///
/// ```text
/// GET    /{id}      -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(resource::get_by_id))
}
