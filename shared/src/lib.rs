//! Shared types for the Shopkeep ERP
//!
//! Common types used by the server and any future client crates: data models,
//! the closed permission enumeration, and the unified error/response
//! structures. DB row derives are gated behind the `db` feature.

pub mod error;
pub mod models;
pub mod permission;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use permission::Permission;
