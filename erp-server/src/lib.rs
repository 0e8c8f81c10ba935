//! Shopkeep ERP Server - retail back office and point-of-sale backend
//!
//! # Architecture overview
//!
//! - **Auth** (`auth`): JWT + Argon2 authentication, role-based permission
//!   resolution and route gating
//! - **Database** (`db`): embedded SQLite storage via sqlx
//! - **Inventory** (`inventory`): per-store and global stock rollups
//! - **HTTP API** (`api`): RESTful API handlers
//!
//! # Module structure
//!
//! ```text
//! erp-server/src/
//! ├── core/          # Config, state, server
//! ├── auth/          # JWT, permission resolver, route gate, bootstrap
//! ├── db/            # Connection pool, migrations, repositories
//! ├── inventory/     # Stock aggregation
//! ├── api/           # HTTP routes and handlers
//! └── routes/        # Router assembly and middleware stack
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod inventory;
pub mod routes;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Security logging macro - structured events on the "security" target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load .env and initialize the tracing subscriber.
///
/// `RUST_LOG` controls the filter; defaults to `info` for the server crates.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,erp_server=info,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____ __                __
  / ___// /_  ____  ____  / /_____  ___  ____
  \__ \/ __ \/ __ \/ __ \/ //_/ _ \/ _ \/ __ \
 ___/ / / / / /_/ / /_/ / ,< /  __/  __/ /_/ /
/____/_/ /_/\____/ .___/_/|_|\___/\___/ .___/
                /_/                  /_/
    "#
    );
}
