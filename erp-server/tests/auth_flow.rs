//! First-run bootstrap through token issuance, against an in-memory database.

use erp_server::auth::bootstrap::ensure_default_roles;
use erp_server::auth::jwt::{JwtConfig, JwtService};
use erp_server::auth::password::{hash_password, verify_password};
use erp_server::auth::{CurrentUser, resolve_permissions};
use erp_server::db::MIGRATOR;
use erp_server::db::repository::{role, user};
use shared::Permission;
use shared::models::UserCreate;
use sqlx::SqlitePool;

async fn test_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
    MIGRATOR.run(&pool).await.unwrap();
    pool
}

fn jwt_service() -> JwtService {
    JwtService::with_config(JwtConfig {
        secret: "integration-test-secret-0123456789abcdef".to_string(),
        expiration_minutes: 15,
        issuer: "erp-server".to_string(),
        audience: "erp-clients".to_string(),
    })
}

#[tokio::test]
async fn test_first_user_ends_up_fully_privileged() {
    let pool = test_pool().await;

    let payload = UserCreate {
        username: "owner".to_string(),
        display_name: Some("Shop Owner".to_string()),
        password: "a long enough password".to_string(),
        role_ids: vec![],
    };
    let hash = hash_password(&payload.password).unwrap();
    let created = user::create(&pool, &payload, &hash).await.unwrap();

    assert!(ensure_default_roles(&pool, created.id).await.unwrap());

    // Login path: verify credentials, resolve, issue, validate
    let found = user::find_by_username(&pool, "owner").await.unwrap().unwrap();
    assert!(verify_password("a long enough password", &found.hash_pass));

    let roles = role::find_for_user(&pool, found.id).await.unwrap();
    let permissions = resolve_permissions(&roles);
    assert_eq!(permissions.len(), Permission::ALL.len());

    let service = jwt_service();
    let token = service
        .generate_token(found.id, &found.username, &permissions)
        .unwrap();
    let claims = service.validate_token(&token).unwrap();

    let current = CurrentUser::try_from(claims).unwrap();
    assert_eq!(current.id, found.id);
    assert!(current.has_permission(Permission::UsersManage));
    assert!(current.has_permission(Permission::PosAccess));
    // Empty requirement still denies
    assert!(!current.has_any_permission(&[]));
}

#[tokio::test]
async fn test_second_user_gets_only_assigned_roles() {
    let pool = test_pool().await;

    let owner = UserCreate {
        username: "owner".to_string(),
        display_name: None,
        password: "a long enough password".to_string(),
        role_ids: vec![],
    };
    let hash = hash_password(&owner.password).unwrap();
    let first = user::create(&pool, &owner, &hash).await.unwrap();
    ensure_default_roles(&pool, first.id).await.unwrap();

    let operator_role = role::find_all(&pool)
        .await
        .unwrap()
        .into_iter()
        .find(|r| r.name == "POS Operator")
        .unwrap();

    let cashier = UserCreate {
        username: "cashier".to_string(),
        display_name: None,
        password: "another good password".to_string(),
        role_ids: vec![operator_role.id],
    };
    let hash = hash_password(&cashier.password).unwrap();
    let second = user::create(&pool, &cashier, &hash).await.unwrap();

    let roles = role::find_for_user(&pool, second.id).await.unwrap();
    let permissions = resolve_permissions(&roles);

    assert!(permissions.contains(&Permission::PosAccess));
    assert!(permissions.contains(&Permission::SalesCreate));
    assert!(!permissions.contains(&Permission::UsersManage));
    assert!(!permissions.contains(&Permission::ItemsEdit));
}
