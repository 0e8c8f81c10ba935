use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::{JwtService, RouteGate};
use crate::core::Config;
use crate::db::DbService;

/// Server state - shared references to every service
///
/// Cloning is shallow (Arc fields), so handlers receive it by value.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Configuration (immutable) |
/// | pool | SqlitePool | Database connection pool |
/// | jwt_service | Arc<JwtService> | JWT authentication service |
/// | gate | Arc<RouteGate> | Ordered route-to-permission rules |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT authentication service
    pub jwt_service: Arc<JwtService>,
    /// Route gating rules
    pub gate: Arc<RouteGate>,
}

impl ServerState {
    pub fn new(
        config: Config,
        pool: SqlitePool,
        jwt_service: Arc<JwtService>,
        gate: Arc<RouteGate>,
    ) -> Self {
        Self {
            config,
            pool,
            jwt_service,
            gate,
        }
    }

    /// Initialize server state in order: database (pool + migrations),
    /// then the JWT service and route gate.
    ///
    /// # Panics
    ///
    /// Panics when the database cannot be opened or migrated.
    pub async fn initialize(config: &Config) -> Self {
        let db_service = DbService::new(&config.database_path)
            .await
            .expect("Failed to initialize database");

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let gate = Arc::new(RouteGate::standard());

        Self::new(config.clone(), db_service.pool, jwt_service, gate)
    }

    /// Get the database pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the JWT service
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
