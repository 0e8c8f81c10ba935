//! Category Repository

use super::{RepoError, RepoResult, map_unique_violation};
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, slug, description, parent_id, is_active";

const UNIQUE_COLUMNS: &[(&str, &str)] = &[("category.name", "name"), ("category.slug", "slug")];

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Category>> {
    let categories =
        sqlx::query_as::<_, Category>(&format!("SELECT {COLUMNS} FROM category ORDER BY name"))
            .fetch_all(pool)
            .await?;
    Ok(categories)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Category>> {
    let category =
        sqlx::query_as::<_, Category>(&format!("SELECT {COLUMNS} FROM category WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(category)
}

pub async fn create(pool: &SqlitePool, data: CategoryCreate) -> RepoResult<Category> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO category (name, slug, description, parent_id, is_active) \
         VALUES (?, ?, ?, ?, COALESCE(?, 1)) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.slug)
    .bind(&data.description)
    .bind(data.parent_id)
    .bind(data.is_active)
    .fetch_one(pool)
    .await
    .map_err(|e| map_unique_violation(e, UNIQUE_COLUMNS))?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create category".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: CategoryUpdate) -> RepoResult<Category> {
    let rows = sqlx::query(
        "UPDATE category SET name = COALESCE(?1, name), slug = COALESCE(?2, slug), \
         description = COALESCE(?3, description), parent_id = COALESCE(?4, parent_id), \
         is_active = COALESCE(?5, is_active) WHERE id = ?6",
    )
    .bind(&data.name)
    .bind(&data.slug)
    .bind(&data.description)
    .bind(data.parent_id)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| map_unique_violation(e, UNIQUE_COLUMNS))?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Category {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))
}
