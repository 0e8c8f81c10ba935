//! First-run bootstrap
//!
//! Seeds the built-in roles and assigns Administrator to the first user.
//! Runs inside a single transaction and is idempotent: once any role exists
//! the routine does nothing.

use sqlx::SqlitePool;

use crate::auth::roles::BUILT_IN_ROLES;
use crate::db::repository::RepoResult;

/// Seed the built-in roles and grant Administrator to `first_user_id`.
///
/// Returns `true` when seeding happened, `false` when roles already existed.
pub async fn ensure_default_roles(pool: &SqlitePool, first_user_id: i64) -> RepoResult<bool> {
    let mut tx = pool.begin().await?;

    // Seeded already (or roles created by other means): leave everything alone
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM role")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        return Ok(false);
    }

    let mut admin_role_id = None;
    for seed in BUILT_IN_ROLES {
        let permissions_json =
            serde_json::to_string(seed.permissions).unwrap_or_else(|_| "[]".to_string());
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO role (name, description, permissions, is_system) \
             VALUES (?, ?, ?, 1) RETURNING id",
        )
        .bind(seed.name)
        .bind(seed.description)
        .bind(&permissions_json)
        .fetch_one(&mut *tx)
        .await?;

        if admin_role_id.is_none() {
            admin_role_id = Some(id);
        }
    }

    if let Some(role_id) = admin_role_id {
        sqlx::query("INSERT OR IGNORE INTO user_role (user_id, role_id) VALUES (?, ?)")
            .bind(first_user_id)
            .bind(role_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    tracing::info!(
        user_id = first_user_id,
        "Seeded built-in roles and assigned Administrator"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MIGRATOR;
    use shared::Permission;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        MIGRATOR.run(&pool).await.unwrap();
        pool
    }

    async fn insert_user(pool: &SqlitePool, username: &str) -> i64 {
        sqlx::query_scalar(
            "INSERT INTO user (username, display_name, hash_pass) VALUES (?, ?, 'x') RETURNING id",
        )
        .bind(username)
        .bind(username)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_bootstrap_seeds_roles_and_assigns_admin() {
        let pool = test_pool().await;
        let user_id = insert_user(&pool, "owner").await;

        let seeded = ensure_default_roles(&pool, user_id).await.unwrap();
        assert!(seeded);

        let roles = crate::db::repository::role::find_all(&pool).await.unwrap();
        assert_eq!(roles.len(), 3);
        assert!(roles.iter().all(|r| r.is_system));

        let assigned = crate::db::repository::role::find_for_user(&pool, user_id)
            .await
            .unwrap();
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].name, "Administrator");
        assert_eq!(assigned[0].permissions.len(), Permission::ALL.len());
    }

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let pool = test_pool().await;
        let user_id = insert_user(&pool, "owner").await;

        assert!(ensure_default_roles(&pool, user_id).await.unwrap());
        assert!(!ensure_default_roles(&pool, user_id).await.unwrap());

        let roles = crate::db::repository::role::find_all(&pool).await.unwrap();
        assert_eq!(roles.len(), 3);

        let assigned = crate::db::repository::role::find_for_user(&pool, user_id)
            .await
            .unwrap();
        assert_eq!(assigned.len(), 1);
    }

    #[tokio::test]
    async fn test_bootstrap_skips_when_any_role_exists() {
        let pool = test_pool().await;
        let user_id = insert_user(&pool, "owner").await;

        sqlx::query("INSERT INTO role (name, permissions) VALUES ('Custom', '[]')")
            .execute(&pool)
            .await
            .unwrap();

        assert!(!ensure_default_roles(&pool, user_id).await.unwrap());
        let roles = crate::db::repository::role::find_all(&pool).await.unwrap();
        assert_eq!(roles.len(), 1);
    }
}
