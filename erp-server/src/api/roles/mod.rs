//! Role API module
//!
//! The route gate already requires `admin:roles:manage` for this area.

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/roles",
        Router::new()
            .route("/", get(handler::list).post(handler::create))
            .route("/{id}", put(handler::update)),
    )
}
