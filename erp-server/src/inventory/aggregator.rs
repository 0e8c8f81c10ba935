//! Stock rollups
//!
//! Pure folds over stock lines. Quantities may be inconsistent upstream
//! (`reserved > quantity`), so availability is clamped to zero wherever a
//! negative figure would misstate what is sellable, while the reserved total
//! and the low-stock ranking keep the raw values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{StockLine, round_money};

/// Number of low-stock entries reported per store
const LOW_STOCK_LIMIT: usize = 5;

/// One low-stock entry in a store rollup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowStockAlert {
    pub item_id: i64,
    pub item_name: String,
    pub sku: String,
    /// Unclamped availability; negative means oversold
    pub available: Decimal,
}

/// Aggregated stock figures for one store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreRollup {
    pub store_id: i64,
    /// Distinct tracked items with a stock record
    pub sku_count: usize,
    /// Sum of availability, clamped at zero per line
    pub on_hand: Decimal,
    /// Sum of reservations, unclamped
    pub reserved: Decimal,
    /// Sum of clamped availability x base price, rounded to 2dp
    pub stock_value: Decimal,
    /// Worst availability first, at most five entries
    pub low_stock: Vec<LowStockAlert>,
}

/// Aggregated figures across every store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalTotals {
    pub sku_count: usize,
    pub on_hand: Decimal,
    pub reserved: Decimal,
    pub stock_value: Decimal,
    pub low_stock_count: usize,
}

/// Roll up the stock lines of one store.
///
/// Lines with `track_inventory == false` are excluded entirely. `threshold`
/// is the availability at or below which a line is flagged low.
pub fn aggregate_store(store_id: i64, lines: &[StockLine], threshold: Decimal) -> StoreRollup {
    let tracked: Vec<&StockLine> = lines
        .iter()
        .filter(|l| l.store_id == store_id && l.track_inventory)
        .collect();

    let mut on_hand = Decimal::ZERO;
    let mut reserved = Decimal::ZERO;
    let mut stock_value = Decimal::ZERO;
    let mut low_stock = Vec::new();

    for line in &tracked {
        let available = line.available();
        let sellable = available.max(Decimal::ZERO);

        on_hand += sellable;
        reserved += line.reserved;
        stock_value += sellable * line.base_price;

        if available <= threshold {
            low_stock.push(LowStockAlert {
                item_id: line.item_id,
                item_name: line.item_name.clone(),
                sku: line.sku.clone(),
                available,
            });
        }
    }

    low_stock.sort_by(|a, b| a.available.cmp(&b.available));
    low_stock.truncate(LOW_STOCK_LIMIT);

    StoreRollup {
        store_id,
        sku_count: tracked.len(),
        on_hand,
        reserved,
        stock_value: round_money(stock_value),
        low_stock,
    }
}

/// Sum per-store rollups into global totals.
pub fn aggregate_global(rollups: &[StoreRollup]) -> GlobalTotals {
    let mut totals = GlobalTotals {
        sku_count: 0,
        on_hand: Decimal::ZERO,
        reserved: Decimal::ZERO,
        stock_value: Decimal::ZERO,
        low_stock_count: 0,
    };

    for rollup in rollups {
        totals.sku_count += rollup.sku_count;
        totals.on_hand += rollup.on_hand;
        totals.reserved += rollup.reserved;
        totals.stock_value += rollup.stock_value;
        totals.low_stock_count += rollup.low_stock.len();
    }

    totals.stock_value = round_money(totals.stock_value);
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn line(
        store_id: i64,
        item_id: i64,
        name: &str,
        quantity: &str,
        reserved: &str,
        base_price: &str,
        track_inventory: bool,
    ) -> StockLine {
        StockLine {
            store_id,
            item_id,
            item_name: name.to_string(),
            sku: format!("SKU-{item_id}"),
            quantity: dec(quantity),
            reserved: dec(reserved),
            base_price: dec(base_price),
            track_inventory,
        }
    }

    #[test]
    fn test_two_item_store_scenario() {
        // Item A: 10 on hand, 2 reserved, priced 50
        // Item B: 3 on hand, 5 reserved (oversold), priced 20
        let lines = vec![
            line(1, 1, "Item A", "10", "2", "50", true),
            line(1, 2, "Item B", "3", "5", "20", true),
        ];

        let rollup = aggregate_store(1, &lines, dec("5"));
        assert_eq!(rollup.sku_count, 2);
        assert_eq!(rollup.on_hand, dec("8"));
        assert_eq!(rollup.reserved, dec("7"));
        assert_eq!(rollup.stock_value, dec("400.00"));

        // Only B is low: A has 8 available, above the threshold of 5
        assert_eq!(rollup.low_stock.len(), 1);
        assert_eq!(rollup.low_stock[0].item_id, 2);
        assert_eq!(rollup.low_stock[0].available, dec("-2"));
    }

    #[test]
    fn test_untracked_items_excluded() {
        let lines = vec![
            line(1, 1, "Tracked", "4", "0", "10", true),
            line(1, 2, "Untracked", "100", "0", "10", false),
        ];

        let rollup = aggregate_store(1, &lines, dec("5"));
        assert_eq!(rollup.sku_count, 1);
        assert_eq!(rollup.on_hand, dec("4"));
        // Untracked lines never surface as low stock either
        assert!(rollup.low_stock.iter().all(|a| a.item_id != 2));
    }

    #[test]
    fn test_oversold_lines_never_go_negative_in_totals() {
        let lines = vec![line(1, 1, "Oversold", "1", "10", "100", true)];

        let rollup = aggregate_store(1, &lines, dec("5"));
        assert_eq!(rollup.on_hand, Decimal::ZERO);
        assert_eq!(rollup.stock_value, dec("0.00"));
        // The reserved total keeps the raw figure
        assert_eq!(rollup.reserved, dec("10"));
    }

    #[test]
    fn test_low_stock_sorted_and_capped() {
        let lines: Vec<StockLine> = (1..=8)
            .map(|i| line(1, i, &format!("Item {i}"), &i.to_string(), "0", "10", true))
            .collect();

        // Threshold above every line: all 8 qualify, only 5 reported
        let rollup = aggregate_store(1, &lines, dec("100"));
        assert_eq!(rollup.low_stock.len(), 5);

        // Ascending by availability, worst first
        let availables: Vec<Decimal> =
            rollup.low_stock.iter().map(|a| a.available).collect();
        let mut sorted = availables.clone();
        sorted.sort();
        assert_eq!(availables, sorted);
        assert_eq!(availables[0], dec("1"));
    }

    #[test]
    fn test_threshold_boundary_inclusive() {
        let lines = vec![
            line(1, 1, "At threshold", "5", "0", "10", true),
            line(1, 2, "Above threshold", "6", "0", "10", true),
        ];

        let rollup = aggregate_store(1, &lines, dec("5"));
        assert_eq!(rollup.low_stock.len(), 1);
        assert_eq!(rollup.low_stock[0].item_id, 1);
    }

    #[test]
    fn test_other_stores_lines_ignored() {
        let lines = vec![
            line(1, 1, "Mine", "3", "0", "10", true),
            line(2, 2, "Elsewhere", "50", "0", "10", true),
        ];

        let rollup = aggregate_store(1, &lines, dec("5"));
        assert_eq!(rollup.sku_count, 1);
        assert_eq!(rollup.on_hand, dec("3"));
    }

    #[test]
    fn test_global_totals_sum_rollups() {
        let lines = vec![
            line(1, 1, "A", "10", "2", "50", true),
            line(1, 2, "B", "3", "5", "20", true),
            line(2, 3, "C", "2", "0", "30", true),
        ];

        let rollups = vec![
            aggregate_store(1, &lines, dec("5")),
            aggregate_store(2, &lines, dec("5")),
        ];
        let totals = aggregate_global(&rollups);

        assert_eq!(totals.sku_count, 3);
        assert_eq!(totals.on_hand, dec("10"));
        assert_eq!(totals.reserved, dec("7"));
        assert_eq!(totals.stock_value, dec("460.00"));
        assert_eq!(totals.low_stock_count, 2);
    }

    #[test]
    fn test_empty_store_rollup() {
        let rollup = aggregate_store(1, &[], dec("5"));
        assert_eq!(rollup.sku_count, 0);
        assert_eq!(rollup.on_hand, Decimal::ZERO);
        assert_eq!(rollup.stock_value, dec("0.00"));
        assert!(rollup.low_stock.is_empty());
    }
}
