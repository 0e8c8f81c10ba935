//! HTTP API modules
//!
//! One module per resource: `mod.rs` declares the router, `handler.rs` the
//! handlers.

pub mod auth;
pub mod categories;
pub mod health;
pub mod inventory;
pub mod items;
pub mod roles;
pub mod stores;
pub mod users;
