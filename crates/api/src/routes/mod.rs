pub mod catalog;
pub mod health;
pub mod resource;
pub mod role;

use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /roles                                 list (?search, limit, offset), create
/// /roles/{role_id}                       get (with resources)
/// /roles/{role_id}/resources             list (?resource_type, difficulty), create
///
/// /resources/{id}                        get
///
/// /catalog/options                       resource types + difficulties (GET)
/// ```
///
/// There are no update or delete routes; catalog entries are
/// create-then-read only. Unmatched paths answer with a JSON 404 and
/// unsupported methods with a JSON 405.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/roles", role::router())
        .nest("/resources", resource::router())
        .nest("/catalog", catalog::router())
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::api_not_found)
}
