//! Repository for the `resources` table.

use careerpath_core::catalog::{Difficulty, ResourceType};
use careerpath_core::types::DbId;
use sqlx::PgPool;

use crate::models::resource::{CreateResource, Resource, ResourceFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, role_id, title, url, resource_type, difficulty, created_at, updated_at";

fn insert_query() -> String {
    format!(
        "INSERT INTO resources (role_id, title, url, resource_type, difficulty) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING {COLUMNS}"
    )
}

/// Provides create and read operations for learning resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// Insert a new resource under `role_id`, returning the created row.
    ///
    /// Fails with a foreign key violation if the role does not exist.
    pub async fn create(
        pool: &PgPool,
        role_id: DbId,
        input: &CreateResource,
    ) -> Result<Resource, sqlx::Error> {
        sqlx::query_as::<_, Resource>(&insert_query())
            .bind(role_id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.resource_type)
            .bind(&input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// Insert a resource within an existing transaction.
    pub async fn create_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        role_id: DbId,
        input: &CreateResource,
    ) -> Result<Resource, sqlx::Error> {
        sqlx::query_as::<_, Resource>(&insert_query())
            .bind(role_id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.resource_type)
            .bind(&input.difficulty)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find a resource by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE id = $1");
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the resources of a role in creation order, optionally narrowed
    /// by type and difficulty.
    pub async fn list_by_role(
        pool: &PgPool,
        role_id: DbId,
        filter: &ResourceFilter,
    ) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM resources \
             WHERE role_id = $1 \
               AND ($2::TEXT IS NULL OR resource_type = $2) \
               AND ($3::TEXT IS NULL OR difficulty = $3) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(role_id)
            .bind(filter.resource_type.map(ResourceType::as_str))
            .bind(filter.difficulty.map(Difficulty::as_str))
            .fetch_all(pool)
            .await
    }
}
