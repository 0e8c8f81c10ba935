//! Inventory API module

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::middleware::require_permission;
use crate::core::ServerState;
use shared::Permission;

pub fn router() -> Router<ServerState> {
    // The route gate covers viewing; adjustments need the write permission
    let adjust = Router::new()
        .route("/adjust", post(handler::adjust))
        .route_layer(middleware::from_fn(require_permission(
            Permission::InventoryAdjust,
        )));

    Router::new().nest(
        "/api/inventory",
        Router::new()
            .route("/", get(handler::overview))
            .route("/stores/{id}", get(handler::store_overview))
            .merge(adjust),
    )
}
