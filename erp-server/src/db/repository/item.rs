//! Item Repository
//!
//! Decimal columns are persisted as canonical 2dp TEXT via
//! [`shared::models::format_money`], so values submitted with two decimal
//! places read back byte-identical.

use super::{RepoError, RepoResult, map_unique_violation};
use shared::models::{Item, ItemCreate, ItemUpdate, format_money};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, sku, barcode, name, description, category_id, base_price, cost_price, \
                       tax_rate, track_inventory, is_serialized, is_active";

const UNIQUE_COLUMNS: &[(&str, &str)] = &[("item.sku", "sku"), ("item.barcode", "barcode")];

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Item>> {
    let items = sqlx::query_as::<_, Item>(&format!("SELECT {COLUMNS} FROM item ORDER BY name"))
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Item>> {
    let item = sqlx::query_as::<_, Item>(&format!("SELECT {COLUMNS} FROM item WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

pub async fn create(pool: &SqlitePool, data: ItemCreate) -> RepoResult<Item> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO item (sku, barcode, name, description, category_id, base_price, cost_price, \
         tax_rate, track_inventory, is_serialized) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.sku)
    .bind(&data.barcode)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.category_id)
    .bind(format_money(data.base_price))
    .bind(format_money(data.cost_price))
    .bind(format_money(data.tax_rate))
    .bind(data.track_inventory)
    .bind(data.is_serialized)
    .fetch_one(pool)
    .await
    .map_err(|e| map_unique_violation(e, UNIQUE_COLUMNS))?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create item".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ItemUpdate) -> RepoResult<Item> {
    let rows = sqlx::query(
        "UPDATE item SET sku = COALESCE(?1, sku), barcode = COALESCE(?2, barcode), \
         name = COALESCE(?3, name), description = COALESCE(?4, description), \
         category_id = COALESCE(?5, category_id), base_price = COALESCE(?6, base_price), \
         cost_price = COALESCE(?7, cost_price), tax_rate = COALESCE(?8, tax_rate), \
         track_inventory = COALESCE(?9, track_inventory), \
         is_serialized = COALESCE(?10, is_serialized), is_active = COALESCE(?11, is_active) \
         WHERE id = ?12",
    )
    .bind(&data.sku)
    .bind(&data.barcode)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.category_id)
    .bind(data.base_price.map(format_money))
    .bind(data.cost_price.map(format_money))
    .bind(data.tax_rate.map(format_money))
    .bind(data.track_inventory)
    .bind(data.is_serialized)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| map_unique_violation(e, UNIQUE_COLUMNS))?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Item {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Item {id} not found")))
}
