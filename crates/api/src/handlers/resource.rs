//! Handlers for learning resources, both role-scoped and by id.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use careerpath_core::error::CoreError;
use careerpath_core::types::DbId;
use careerpath_db::models::resource::{CreateResource, Resource};
use careerpath_db::repositories::{ResourceRepo, RoleRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery, ValidatedJson};
use crate::query::ResourceListParams;
use crate::response::DataResponse;
use crate::state::AppState;

async fn ensure_role_exists(state: &AppState, role_id: DbId) -> AppResult<()> {
    if RoleRepo::exists(&state.pool, role_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Role",
            id: role_id,
        }))
    }
}

/// GET /api/v1/roles/{role_id}/resources
pub async fn list_by_role(
    State(state): State<AppState>,
    AppPath(role_id): AppPath<DbId>,
    AppQuery(params): AppQuery<ResourceListParams>,
) -> AppResult<Json<DataResponse<Vec<Resource>>>> {
    let filter = params.to_filter()?;
    ensure_role_exists(&state, role_id).await?;
    let resources = ResourceRepo::list_by_role(&state.pool, role_id, &filter).await?;
    Ok(Json(DataResponse { data: resources }))
}

/// POST /api/v1/roles/{role_id}/resources
pub async fn create(
    State(state): State<AppState>,
    AppPath(role_id): AppPath<DbId>,
    ValidatedJson(input): ValidatedJson<CreateResource>,
) -> AppResult<(StatusCode, Json<DataResponse<Resource>>)> {
    ensure_role_exists(&state, role_id).await?;
    let resource = ResourceRepo::create(&state.pool, role_id, &input).await?;
    tracing::info!(
        resource_id = resource.id,
        role_id,
        resource_type = %resource.resource_type,
        "Resource created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: resource })))
}

/// GET /api/v1/resources/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Resource>>> {
    let resource = ResourceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))?;
    Ok(Json(DataResponse { data: resource }))
}
