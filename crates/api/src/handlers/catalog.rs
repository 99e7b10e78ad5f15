//! Handler exposing the fixed catalog enumerations to the frontend.

use axum::Json;
use careerpath_core::catalog::{Difficulty, ResourceType};
use serde::Serialize;

use crate::response::DataResponse;

/// Values the frontend offers in its resource form.
#[derive(Debug, Serialize)]
pub struct CatalogOptions {
    pub resource_types: Vec<ResourceType>,
    pub difficulties: Vec<Difficulty>,
}

/// GET /api/v1/catalog/options
pub async fn options() -> Json<DataResponse<CatalogOptions>> {
    Json(DataResponse {
        data: CatalogOptions {
            resource_types: ResourceType::ALL.to_vec(),
            difficulties: Difficulty::ALL.to_vec(),
        },
    })
}
