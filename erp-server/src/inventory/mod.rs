//! Inventory aggregation

pub mod aggregator;

pub use aggregator::{GlobalTotals, LowStockAlert, StoreRollup, aggregate_global, aggregate_store};
