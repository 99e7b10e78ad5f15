//! Query parameter types for list endpoints.

use careerpath_core::catalog::{Difficulty, ResourceType};
use careerpath_core::error::CoreError;
use careerpath_core::validation::contains_nul;
use careerpath_db::models::resource::ResourceFilter;
use serde::Deserialize;

/// `GET /roles?search=&limit=&offset=`.
///
/// Values are clamped in the handler via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Default, Deserialize)]
pub struct RoleListParams {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl RoleListParams {
    /// The trimmed search term, or `None` when absent or blank.
    pub fn search_term(&self) -> Result<Option<&str>, CoreError> {
        match non_empty(&self.search) {
            Some(term) if contains_nul(term) => Err(CoreError::Validation(
                "search must not contain NUL characters".into(),
            )),
            other => Ok(other),
        }
    }
}

/// `GET /roles/{role_id}/resources?resource_type=&difficulty=`.
#[derive(Debug, Default, Deserialize)]
pub struct ResourceListParams {
    pub resource_type: Option<String>,
    pub difficulty: Option<String>,
}

impl ResourceListParams {
    /// Parse the raw filter strings. Empty values count as absent.
    pub fn to_filter(&self) -> Result<ResourceFilter, CoreError> {
        let resource_type = non_empty(&self.resource_type)
            .map(str::parse::<ResourceType>)
            .transpose()?;
        let difficulty = non_empty(&self.difficulty)
            .map(str::parse::<Difficulty>)
            .transpose()?;
        Ok(ResourceFilter {
            resource_type,
            difficulty,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
