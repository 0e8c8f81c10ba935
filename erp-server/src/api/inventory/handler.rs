//! Inventory API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::{stock, store};
use crate::inventory::{GlobalTotals, StoreRollup, aggregate_global, aggregate_store};
use shared::models::{StockAdjust, StockRecord, Store};
use shared::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct StoreOverview {
    pub store: Store,
    #[serde(flatten)]
    pub rollup: StoreRollup,
}

#[derive(Debug, Serialize)]
pub struct InventoryOverview {
    pub stores: Vec<StoreOverview>,
    pub totals: GlobalTotals,
}

/// GET /api/inventory - per-store rollups plus global totals
pub async fn overview(State(state): State<ServerState>) -> AppResult<Json<InventoryOverview>> {
    let pool = state.get_pool();
    let threshold = state.config.low_stock_threshold;

    let stores = store::find_all(pool).await?;
    let lines = stock::find_lines(pool).await?;

    let overviews: Vec<StoreOverview> = stores
        .into_iter()
        .map(|s| {
            let rollup = aggregate_store(s.id, &lines, threshold);
            StoreOverview { store: s, rollup }
        })
        .collect();

    let totals =
        aggregate_global(&overviews.iter().map(|o| o.rollup.clone()).collect::<Vec<_>>());

    Ok(Json(InventoryOverview {
        stores: overviews,
        totals,
    }))
}

/// GET /api/inventory/stores/{id} - rollup for a single store
pub async fn store_overview(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<StoreOverview>> {
    let pool = state.get_pool();

    let store = store::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Store {id} not found")))?;

    let lines = stock::find_lines_for_store(pool, id).await?;
    let rollup = aggregate_store(id, &lines, state.config.low_stock_threshold);

    Ok(Json(StoreOverview { store, rollup }))
}

/// POST /api/inventory/adjust - set absolute stock levels for one item
pub async fn adjust(
    State(state): State<ServerState>,
    Json(payload): Json<StockAdjust>,
) -> AppResult<Json<StockRecord>> {
    payload
        .validate_payload()
        .map_err(|e| AppError::from_validation_errors(&e))?;

    let record = stock::adjust(state.get_pool(), &payload).await?;
    Ok(Json(record))
}
