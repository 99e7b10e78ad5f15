//! Career role entity model and DTOs.

use careerpath_core::types::{DbId, Timestamp};
use careerpath_core::validation::{
    trimmed, trimmed_list, validate_responsibilities, validate_skills, validate_text,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use validator::Validate;

use crate::models::resource::{CreateResource, Resource};

/// A role row from the `roles` table.
///
/// `responsibilities` and `skills` are `TEXT[]` columns; their order is the
/// order the caller supplied on create.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Role {
    #[ts(type = "number")]
    pub id: DbId,
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row of the role listing: just enough to render a catalog card.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct RoleSummary {
    #[ts(type = "number")]
    pub id: DbId,
    pub name: String,
    pub short_description: String,
    #[ts(type = "number")]
    pub resource_count: i64,
}

/// A role together with all of its resources.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RoleDetail {
    #[serde(flatten)]
    pub role: Role,
    pub resources: Vec<Resource>,
}

/// DTO for creating a new role, optionally with its first resources.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRole {
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, max = 100, message = "name must be 1-100 characters"),
        custom(function = "validate_text")
    )]
    pub name: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, max = 280, message = "short_description must be 1-280 characters"),
        custom(function = "validate_text")
    )]
    pub short_description: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, max = 5000, message = "long_description must be 1-5000 characters"),
        custom(function = "validate_text")
    )]
    pub long_description: String,

    #[serde(deserialize_with = "trimmed_list")]
    #[validate(
        length(min = 1, max = 50, message = "responsibilities must list 1-50 items"),
        custom(function = "validate_responsibilities")
    )]
    pub responsibilities: Vec<String>,

    #[serde(deserialize_with = "trimmed_list")]
    #[validate(
        length(min = 1, max = 50, message = "skills must list 1-50 items"),
        custom(function = "validate_skills")
    )]
    pub skills: Vec<String>,

    /// Resources inserted in the same transaction as the role.
    #[serde(default)]
    #[validate(length(max = 50, message = "at most 50 resources per request"), nested)]
    pub resources: Vec<CreateResource>,
}
