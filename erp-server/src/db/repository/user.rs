//! User Repository

use super::{RepoError, RepoResult, map_unique_violation};
use shared::models::{User, UserCreate, UserUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, username, display_name, hash_pass, is_active";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM user ORDER BY username"))
        .fetch_all(pool)
        .await?;
    Ok(users)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM user WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {COLUMNS} FROM user WHERE username = ? LIMIT 1"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Role names assigned to a user, for API responses.
pub async fn role_names(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<String>> {
    let names: Vec<String> = sqlx::query_scalar(
        "SELECT r.name FROM role r JOIN user_role ur ON ur.role_id = r.id \
         WHERE ur.user_id = ? ORDER BY r.name",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(names)
}

/// Create a user with a pre-hashed password and assign the given roles.
pub async fn create(pool: &SqlitePool, data: &UserCreate, hash_pass: &str) -> RepoResult<User> {
    let display_name = data
        .display_name
        .clone()
        .unwrap_or_else(|| data.username.clone());

    let mut tx = pool.begin().await?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO user (username, display_name, hash_pass) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.username)
    .bind(&display_name)
    .bind(hash_pass)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| map_unique_violation(e, &[("user.username", "username")]))?;

    for role_id in &data.role_ids {
        sqlx::query("INSERT OR IGNORE INTO user_role (user_id, role_id) VALUES (?, ?)")
            .bind(id)
            .bind(role_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &UserUpdate,
    hash_pass: Option<&str>,
) -> RepoResult<User> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query(
        "UPDATE user SET display_name = COALESCE(?1, display_name), \
         hash_pass = COALESCE(?2, hash_pass), is_active = COALESCE(?3, is_active) WHERE id = ?4",
    )
    .bind(&data.display_name)
    .bind(hash_pass)
    .bind(data.is_active)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }

    // Replace role assignments when the payload names them
    if let Some(role_ids) = &data.role_ids {
        sqlx::query("DELETE FROM user_role WHERE user_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        for role_id in role_ids {
            sqlx::query("INSERT OR IGNORE INTO user_role (user_id, role_id) VALUES (?, ?)")
                .bind(id)
                .bind(role_id)
                .execute(&mut *tx)
                .await?;
        }
    }

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))
}
