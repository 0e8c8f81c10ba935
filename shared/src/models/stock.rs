//! Stock Model
//!
//! A `StockRecord` tracks one item's quantity at one store. `reserved` counts
//! units committed to orders but not yet shipped; it may exceed `quantity`
//! (oversell), so the derived available figure can go negative.

use super::validate::invalid;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Stock record entity (one item at one store)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRecord {
    pub id: i64,
    pub store_id: i64,
    pub item_id: i64,
    pub quantity: Decimal,
    pub reserved: Decimal,
}

impl StockRecord {
    /// Sellable units. Negative when reservations exceed on-hand quantity.
    pub fn available(&self) -> Decimal {
        self.quantity - self.reserved
    }
}

#[cfg(feature = "db")]
impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for StockRecord {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        Ok(Self {
            id: row.try_get("id")?,
            store_id: row.try_get("store_id")?,
            item_id: row.try_get("item_id")?,
            quantity: super::decimal_col(row, "quantity")?,
            reserved: super::decimal_col(row, "reserved")?,
        })
    }
}

/// Stock record joined with the item fields the rollups need
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockLine {
    pub store_id: i64,
    pub item_id: i64,
    pub item_name: String,
    pub sku: String,
    pub quantity: Decimal,
    pub reserved: Decimal,
    pub base_price: Decimal,
    pub track_inventory: bool,
}

impl StockLine {
    /// Sellable units. Negative when reservations exceed on-hand quantity.
    pub fn available(&self) -> Decimal {
        self.quantity - self.reserved
    }
}

#[cfg(feature = "db")]
impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for StockLine {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        Ok(Self {
            store_id: row.try_get("store_id")?,
            item_id: row.try_get("item_id")?,
            item_name: row.try_get("item_name")?,
            sku: row.try_get("sku")?,
            quantity: super::decimal_col(row, "quantity")?,
            reserved: super::decimal_col(row, "reserved")?,
            base_price: super::decimal_col(row, "base_price")?,
            track_inventory: row.try_get("track_inventory")?,
        })
    }
}

/// Stock adjustment payload (sets the absolute levels for one item at one store)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StockAdjust {
    pub store_id: i64,
    pub item_id: i64,
    pub quantity: Decimal,
    /// When absent the current reservation level is kept
    pub reserved: Option<Decimal>,
}

impl StockAdjust {
    /// Both levels must be non-negative; `reserved > quantity` is allowed.
    pub fn validate_payload(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.quantity < Decimal::ZERO {
            errors.add(
                "quantity",
                invalid("negative_quantity", "Quantity cannot be negative"),
            );
        }
        if let Some(reserved) = self.reserved {
            if reserved < Decimal::ZERO {
                errors.add(
                    "reserved",
                    invalid("negative_quantity", "Reserved cannot be negative"),
                );
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_available_can_go_negative() {
        let record = StockRecord {
            id: 1,
            store_id: 1,
            item_id: 1,
            quantity: dec("3"),
            reserved: dec("5"),
        };
        assert_eq!(record.available(), dec("-2"));
    }

    #[test]
    fn test_adjust_rejects_negative_levels() {
        let adjust = StockAdjust {
            store_id: 1,
            item_id: 1,
            quantity: dec("-1"),
            reserved: Some(dec("-2")),
        };
        let err = adjust.validate_payload().unwrap_err();
        let fields = err.field_errors();
        assert!(fields.keys().any(|k| k == "quantity"));
        assert!(fields.keys().any(|k| k == "reserved"));
    }

    #[test]
    fn test_adjust_allows_reserved_above_quantity() {
        let adjust = StockAdjust {
            store_id: 1,
            item_id: 1,
            quantity: dec("3"),
            reserved: Some(dec("5")),
        };
        assert!(adjust.validate_payload().is_ok());
    }
}
