//! Store Repository

use super::{RepoError, RepoResult, map_unique_violation};
use shared::models::{Store, StoreCreate, StoreUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, code, name, city, state, is_active";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Store>> {
    let stores = sqlx::query_as::<_, Store>(&format!("SELECT {COLUMNS} FROM store ORDER BY code"))
        .fetch_all(pool)
        .await?;
    Ok(stores)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Store>> {
    let store = sqlx::query_as::<_, Store>(&format!("SELECT {COLUMNS} FROM store WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(store)
}

pub async fn create(pool: &SqlitePool, data: StoreCreate) -> RepoResult<Store> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO store (code, name, city, state) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.code)
    .bind(&data.name)
    .bind(&data.city)
    .bind(&data.state)
    .fetch_one(pool)
    .await
    .map_err(|e| map_unique_violation(e, &[("store.code", "code")]))?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create store".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: StoreUpdate) -> RepoResult<Store> {
    let rows = sqlx::query(
        "UPDATE store SET name = COALESCE(?1, name), city = COALESCE(?2, city), \
         state = COALESCE(?3, state), is_active = COALESCE(?4, is_active) WHERE id = ?5",
    )
    .bind(&data.name)
    .bind(&data.city)
    .bind(&data.state)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Store {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Store {id} not found")))
}
