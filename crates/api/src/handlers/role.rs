//! Handlers for the `/roles` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use careerpath_core::error::CoreError;
use careerpath_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use careerpath_core::types::DbId;
use careerpath_db::models::role::{CreateRole, RoleDetail, RoleSummary};
use careerpath_db::repositories::RoleRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery, ValidatedJson};
use crate::query::RoleListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/roles
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<RoleListParams>,
) -> AppResult<Json<DataResponse<Vec<RoleSummary>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let offset = clamp_offset(params.offset);
    let search = params.search_term()?;
    let roles = RoleRepo::list(&state.pool, search, limit, offset).await?;
    Ok(Json(DataResponse { data: roles }))
}

/// POST /api/v1/roles
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateRole>,
) -> AppResult<(StatusCode, Json<DataResponse<RoleDetail>>)> {
    let detail = RoleRepo::create(&state.pool, &input).await?;
    tracing::info!(
        role_id = detail.role.id,
        name = %detail.role.name,
        resources = detail.resources.len(),
        "Role created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/roles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<RoleDetail>>> {
    let detail = RoleRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Role", id }))?;
    Ok(Json(DataResponse { data: detail }))
}
