//! Learning resource entity model and DTOs.

use careerpath_core::catalog::{Difficulty, ResourceType};
use careerpath_core::types::{DbId, Timestamp};
use careerpath_core::validation::{
    trimmed, validate_difficulty, validate_http_url, validate_resource_type, validate_text,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use validator::Validate;

/// A resource row from the `resources` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Resource {
    #[ts(type = "number")]
    pub id: DbId,
    #[ts(type = "number")]
    pub role_id: DbId,
    pub title: String,
    pub url: String,
    /// One of `article`, `video`, `course`.
    pub resource_type: String,
    /// One of `beginner`, `intermediate`, `advanced`.
    pub difficulty: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a resource. The owning role comes from the URL path
/// (or from the enclosing [`CreateRole`](super::role::CreateRole)).
///
/// `Serialize` is needed by the `length` check on `CreateRole::resources`,
/// which attaches the offending list to its error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateResource {
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, max = 200, message = "title must be 1-200 characters"),
        custom(function = "validate_text")
    )]
    pub title: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(max = 2048, message = "url must be at most 2048 characters"),
        custom(function = "validate_http_url")
    )]
    pub url: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_resource_type"))]
    pub resource_type: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: String,
}

/// Optional narrowing of a role's resource list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceFilter {
    pub resource_type: Option<ResourceType>,
    pub difficulty: Option<Difficulty>,
}
