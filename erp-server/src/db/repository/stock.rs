//! Stock Repository
//!
//! Quantity columns are TEXT decimals; adjustments upsert the absolute levels
//! for one (store, item) pair.

use super::{RepoError, RepoResult};
use rust_decimal::Decimal;
use shared::models::{StockAdjust, StockLine, StockRecord};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, store_id, item_id, quantity, reserved";

/// Stock lines joined with the item fields the rollups need.
///
/// Only active items are included; `track_inventory` is carried through so
/// the aggregator can apply its own filtering.
pub async fn find_lines(pool: &SqlitePool) -> RepoResult<Vec<StockLine>> {
    let lines = sqlx::query_as::<_, StockLine>(
        "SELECT s.store_id, s.item_id, i.name AS item_name, i.sku, s.quantity, s.reserved, \
         i.base_price, i.track_inventory \
         FROM stock_record s \
         JOIN item i ON i.id = s.item_id \
         WHERE i.is_active = 1 \
         ORDER BY s.store_id, i.sku",
    )
    .fetch_all(pool)
    .await?;
    Ok(lines)
}

/// Stock lines for a single store.
pub async fn find_lines_for_store(pool: &SqlitePool, store_id: i64) -> RepoResult<Vec<StockLine>> {
    let lines = sqlx::query_as::<_, StockLine>(
        "SELECT s.store_id, s.item_id, i.name AS item_name, i.sku, s.quantity, s.reserved, \
         i.base_price, i.track_inventory \
         FROM stock_record s \
         JOIN item i ON i.id = s.item_id \
         WHERE i.is_active = 1 AND s.store_id = ? \
         ORDER BY i.sku",
    )
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    Ok(lines)
}

pub async fn find_record(
    pool: &SqlitePool,
    store_id: i64,
    item_id: i64,
) -> RepoResult<Option<StockRecord>> {
    let record = sqlx::query_as::<_, StockRecord>(&format!(
        "SELECT {COLUMNS} FROM stock_record WHERE store_id = ? AND item_id = ?"
    ))
    .bind(store_id)
    .bind(item_id)
    .fetch_optional(pool)
    .await?;
    Ok(record)
}

/// Set the absolute stock levels for one item at one store.
///
/// Creates the record on first adjustment. When `reserved` is absent the
/// current reservation level is kept (zero for a new record).
pub async fn adjust(pool: &SqlitePool, data: &StockAdjust) -> RepoResult<StockRecord> {
    let store_exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM store WHERE id = ?")
        .bind(data.store_id)
        .fetch_one(pool)
        .await?;
    if store_exists == 0 {
        return Err(RepoError::NotFound(format!(
            "Store {} not found",
            data.store_id
        )));
    }

    let item_exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM item WHERE id = ?")
        .bind(data.item_id)
        .fetch_one(pool)
        .await?;
    if item_exists == 0 {
        return Err(RepoError::NotFound(format!(
            "Item {} not found",
            data.item_id
        )));
    }

    let reserved = match data.reserved {
        Some(r) => r,
        None => find_record(pool, data.store_id, data.item_id)
            .await?
            .map(|r| r.reserved)
            .unwrap_or(Decimal::ZERO),
    };

    sqlx::query(
        "INSERT INTO stock_record (store_id, item_id, quantity, reserved) VALUES (?, ?, ?, ?) \
         ON CONFLICT (store_id, item_id) DO UPDATE SET quantity = excluded.quantity, \
         reserved = excluded.reserved",
    )
    .bind(data.store_id)
    .bind(data.item_id)
    .bind(data.quantity.to_string())
    .bind(reserved.to_string())
    .execute(pool)
    .await?;

    find_record(pool, data.store_id, data.item_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to adjust stock record".into()))
}
