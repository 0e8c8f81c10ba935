//! Item Model
//!
//! Catalog items carry three decimal attributes (`base_price`, `cost_price`,
//! `tax_rate`). They are `rust_decimal::Decimal` end to end and are persisted
//! as TEXT rounded to 2 decimal places, so a submitted `100.00` reads back
//! and renders identically.

use super::validate::invalid;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub sku: String,
    pub barcode: Option<String>,
    pub name: String,
    pub description: Option<String>,
    /// Category reference (optional)
    pub category_id: Option<i64>,
    /// Valuation price, >= 0
    pub base_price: Decimal,
    /// Acquisition price, >= 0 and <= base_price
    pub cost_price: Decimal,
    /// Tax rate in percent, 0..=100
    pub tax_rate: Decimal,
    /// When false, this item's stock records are excluded from every rollup
    pub track_inventory: bool,
    pub is_serialized: bool,
    pub is_active: bool,
}

#[cfg(feature = "db")]
impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for Item {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        Ok(Self {
            id: row.try_get("id")?,
            sku: row.try_get("sku")?,
            barcode: row.try_get("barcode")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            category_id: row.try_get("category_id")?,
            base_price: super::decimal_col(row, "base_price")?,
            cost_price: super::decimal_col(row, "cost_price")?,
            tax_rate: super::decimal_col(row, "tax_rate")?,
            track_inventory: row.try_get("track_inventory")?,
            is_serialized: row.try_get("is_serialized")?,
            is_active: row.try_get("is_active")?,
        })
    }
}

/// Round a money value to its canonical 2-decimal form.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp(2)
}

/// Render a money value with fixed 2-decimal formatting (e.g. `100.00`).
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// Create item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItemCreate {
    #[validate(length(min = 1, max = 64, message = "SKU must be 1 to 64 characters"))]
    pub sku: String,
    #[validate(length(max = 64, message = "Barcode must be 64 characters or less"))]
    pub barcode: Option<String>,
    #[validate(length(min = 1, max = 120, message = "Name must be 1 to 120 characters"))]
    pub name: String,
    #[validate(length(max = 600, message = "Description must be 600 characters or less"))]
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub base_price: Decimal,
    pub cost_price: Decimal,
    pub tax_rate: Decimal,
    #[serde(default = "default_true")]
    pub track_inventory: bool,
    #[serde(default)]
    pub is_serialized: bool,
}

fn default_true() -> bool {
    true
}

impl ItemCreate {
    /// Run every rule and collect all failures, not just the first.
    pub fn validate_payload(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };
        check_prices(
            &mut errors,
            self.base_price,
            self.cost_price,
            Some(self.tax_rate),
        );
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Update item payload
///
/// Partial update: absent fields keep their stored value, and JSON `null`
/// deserializes to `None` so it behaves the same as an absent field. Nullable
/// columns (`barcode`, `description`, `category_id`) therefore cannot be
/// cleared through this payload; send the replacement value instead.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItemUpdate {
    #[validate(length(min = 1, max = 64, message = "SKU must be 1 to 64 characters"))]
    pub sku: Option<String>,
    #[validate(length(max = 64, message = "Barcode must be 64 characters or less"))]
    pub barcode: Option<String>,
    #[validate(length(min = 1, max = 120, message = "Name must be 1 to 120 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 600, message = "Description must be 600 characters or less"))]
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub base_price: Option<Decimal>,
    pub cost_price: Option<Decimal>,
    pub tax_rate: Option<Decimal>,
    pub track_inventory: Option<bool>,
    pub is_serialized: Option<bool>,
    pub is_active: Option<bool>,
}

impl ItemUpdate {
    /// Validate against the values that will end up persisted: fields absent
    /// from the payload fall back to the current row so cross-field rules
    /// still hold after a partial update.
    pub fn validate_payload(&self, current: &Item) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };
        check_prices(
            &mut errors,
            self.base_price.unwrap_or(current.base_price),
            self.cost_price.unwrap_or(current.cost_price),
            self.tax_rate,
        );
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn check_prices(
    errors: &mut ValidationErrors,
    base_price: Decimal,
    cost_price: Decimal,
    tax_rate: Option<Decimal>,
) {
    if base_price < Decimal::ZERO {
        errors.add(
            "base_price",
            invalid("negative_price", "Base price cannot be negative"),
        );
    }
    if cost_price < Decimal::ZERO {
        errors.add(
            "cost_price",
            invalid("negative_price", "Cost price cannot be negative"),
        );
    }
    if let Some(rate) = tax_rate {
        if rate < Decimal::ZERO || rate > Decimal::from(100) {
            errors.add(
                "tax_rate",
                invalid("tax_rate_range", "Tax rate must be between 0 and 100"),
            );
        }
    }
    // Only meaningful once both prices are individually valid
    if base_price >= Decimal::ZERO && cost_price > base_price {
        errors.add(
            "cost_price",
            invalid("cost_exceeds_base", "Cost price cannot exceed base price"),
        );
    }
}
