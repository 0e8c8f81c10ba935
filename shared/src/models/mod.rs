//! Data models
//!
//! Shared between erp-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`;
//! rows carrying decimal columns (stored as TEXT in SQLite) implement
//! `FromRow` by hand. All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod category;
pub mod item;
pub mod role;
pub mod stock;
pub mod store;
pub mod user;
pub mod validate;

// Re-exports
pub use category::*;
pub use item::*;
pub use role::*;
pub use stock::*;
pub use store::*;
pub use user::*;

/// Decode a TEXT decimal column into a `Decimal`.
#[cfg(feature = "db")]
pub(crate) fn decimal_col(
    row: &sqlx::sqlite::SqliteRow,
    index: &str,
) -> Result<rust_decimal::Decimal, sqlx::Error> {
    use sqlx::Row;

    let raw: String = row.try_get(index)?;
    raw.parse().map_err(|e: rust_decimal::Error| sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: Box::new(e),
    })
}
