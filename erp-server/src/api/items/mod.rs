//! Item API module

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::middleware::require_permission;
use crate::core::ServerState;
use shared::Permission;

pub fn router() -> Router<ServerState> {
    // Viewing is covered by the route gate; mutations need the edit permission
    let view = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id));

    let edit = Router::new()
        .route("/", post(handler::create))
        .route("/{id}", put(handler::update))
        .route_layer(middleware::from_fn(require_permission(
            Permission::ItemsEdit,
        )));

    Router::new().nest("/api/items", view.merge(edit))
}
