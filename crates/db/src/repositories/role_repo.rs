//! Repository for the `roles` table.

use careerpath_core::types::DbId;
use sqlx::PgPool;

use crate::models::resource::ResourceFilter;
use crate::models::role::{CreateRole, Role, RoleDetail, RoleSummary};
use crate::repositories::ResourceRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, short_description, long_description, \
    responsibilities, skills, created_at, updated_at";

/// Provides create and read operations for career roles.
pub struct RoleRepo;

impl RoleRepo {
    /// Insert a new role and any inline resources in one transaction,
    /// returning the created role with its resources.
    ///
    /// Nothing is written if any insert fails.
    pub async fn create(pool: &PgPool, input: &CreateRole) -> Result<RoleDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO roles \
                (name, short_description, long_description, responsibilities, skills) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let role = sqlx::query_as::<_, Role>(&query)
            .bind(&input.name)
            .bind(&input.short_description)
            .bind(&input.long_description)
            .bind(&input.responsibilities)
            .bind(&input.skills)
            .fetch_one(&mut *tx)
            .await?;

        let mut resources = Vec::with_capacity(input.resources.len());
        for resource in &input.resources {
            resources.push(ResourceRepo::create_in_tx(&mut tx, role.id, resource).await?);
        }

        tx.commit().await?;
        tracing::debug!(role_id = role.id, resources = resources.len(), "Role created");
        Ok(RoleDetail { role, resources })
    }

    /// Find a role by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE id = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a role and all of its resources (in creation order).
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<RoleDetail>, sqlx::Error> {
        let Some(role) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let resources = ResourceRepo::list_by_role(pool, id, &ResourceFilter::default()).await?;
        Ok(Some(RoleDetail { role, resources }))
    }

    /// Whether a role with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM roles WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List role summaries ordered by name (case-insensitive).
    ///
    /// `search` matches a case-insensitive substring of the name; LIKE
    /// wildcards in it are matched literally.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RoleSummary>, sqlx::Error> {
        let pattern = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(s)));

        sqlx::query_as::<_, RoleSummary>(
            "SELECT r.id, r.name, r.short_description, COUNT(res.id) AS resource_count \
             FROM roles r \
             LEFT JOIN resources res ON res.role_id = r.id \
             WHERE ($1::TEXT IS NULL OR r.name ILIKE $1 ESCAPE '\\') \
             GROUP BY r.id \
             ORDER BY LOWER(r.name), r.id \
             LIMIT $2 OFFSET $3",
        )
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Total number of roles.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM roles")
            .fetch_one(pool)
            .await
    }
}

/// Escape `%`, `_` and the escape character itself for a LIKE pattern.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escape_like_passes_plain_text_through() {
        assert_eq!(escape_like("Data Analyst"), "Data Analyst");
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("100%_done\\"), "100\\%\\_done\\\\");
    }
}
