//! End-to-end repository and rollup flow against an in-memory database.

use erp_server::db::MIGRATOR;
use erp_server::db::repository::{RepoError, category, item, stock, store};
use erp_server::inventory::{aggregate_global, aggregate_store};
use rust_decimal::Decimal;
use shared::models::{
    CategoryCreate, ItemCreate, ItemUpdate, StockAdjust, StoreCreate, format_money,
};
use sqlx::SqlitePool;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

async fn test_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
    MIGRATOR.run(&pool).await.unwrap();
    pool
}

fn item_payload(sku: &str, name: &str, base_price: &str, track_inventory: bool) -> ItemCreate {
    ItemCreate {
        sku: sku.to_string(),
        barcode: None,
        name: name.to_string(),
        description: None,
        category_id: None,
        base_price: dec(base_price),
        cost_price: dec("0"),
        tax_rate: dec("0"),
        track_inventory,
        is_serialized: false,
    }
}

#[tokio::test]
async fn test_price_round_trip_through_database() {
    let pool = test_pool().await;

    let created = item::create(&pool, item_payload("SKU-1", "Beans", "100.00", true))
        .await
        .unwrap();
    let loaded = item::find_by_id(&pool, created.id).await.unwrap().unwrap();

    assert_eq!(format_money(loaded.base_price), "100.00");
}

#[tokio::test]
async fn test_duplicate_sku_maps_to_field() {
    let pool = test_pool().await;

    item::create(&pool, item_payload("SKU-1", "First", "10", true))
        .await
        .unwrap();
    let err = item::create(&pool, item_payload("SKU-1", "Second", "10", true))
        .await
        .unwrap_err();

    match err {
        RepoError::Duplicate { field } => assert_eq!(field, "sku"),
        other => panic!("expected duplicate error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_keeps_nullable_columns_when_absent() {
    let pool = test_pool().await;

    let mut payload = item_payload("SKU-1", "Beans", "10", true);
    payload.barcode = Some("4006381333931".to_string());
    let created = item::create(&pool, payload).await.unwrap();

    // Partial update touching only the name; barcode stays as stored
    let updated = item::update(
        &pool,
        created.id,
        ItemUpdate {
            sku: None,
            barcode: None,
            name: Some("Espresso Beans".to_string()),
            description: None,
            category_id: None,
            base_price: None,
            cost_price: None,
            tax_rate: None,
            track_inventory: None,
            is_serialized: None,
            is_active: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Espresso Beans");
    assert_eq!(updated.barcode.as_deref(), Some("4006381333931"));
}

#[tokio::test]
async fn test_duplicate_category_slug_maps_to_field() {
    let pool = test_pool().await;

    let payload = CategoryCreate {
        name: "Menswear".to_string(),
        slug: "mens-wear".to_string(),
        description: None,
        parent_id: None,
        is_active: None,
    };
    category::create(&pool, payload.clone()).await.unwrap();

    let mut second = payload;
    second.name = "Other".to_string();
    let err = category::create(&pool, second).await.unwrap_err();

    match err {
        RepoError::Duplicate { field } => assert_eq!(field, "slug"),
        other => panic!("expected duplicate error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_adjust_unknown_store_is_not_found() {
    let pool = test_pool().await;

    let created = item::create(&pool, item_payload("SKU-1", "Beans", "10", true))
        .await
        .unwrap();

    let err = stock::adjust(
        &pool,
        &StockAdjust {
            store_id: 999,
            item_id: created.id,
            quantity: dec("1"),
            reserved: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn test_stock_adjust_and_rollup() {
    let pool = test_pool().await;

    let shop = store::create(
        &pool,
        StoreCreate {
            code: "HQ".to_string(),
            name: "Head Office".to_string(),
            city: None,
            state: None,
        },
    )
    .await
    .unwrap();

    let a = item::create(&pool, item_payload("SKU-A", "Item A", "50", true))
        .await
        .unwrap();
    let b = item::create(&pool, item_payload("SKU-B", "Item B", "20", true))
        .await
        .unwrap();
    let hidden = item::create(&pool, item_payload("SKU-C", "Untracked", "99", false))
        .await
        .unwrap();

    stock::adjust(
        &pool,
        &StockAdjust {
            store_id: shop.id,
            item_id: a.id,
            quantity: dec("10"),
            reserved: Some(dec("2")),
        },
    )
    .await
    .unwrap();
    stock::adjust(
        &pool,
        &StockAdjust {
            store_id: shop.id,
            item_id: b.id,
            quantity: dec("3"),
            reserved: Some(dec("5")),
        },
    )
    .await
    .unwrap();
    stock::adjust(
        &pool,
        &StockAdjust {
            store_id: shop.id,
            item_id: hidden.id,
            quantity: dec("100"),
            reserved: None,
        },
    )
    .await
    .unwrap();

    let lines = stock::find_lines(&pool).await.unwrap();
    let rollup = aggregate_store(shop.id, &lines, dec("5"));

    assert_eq!(rollup.sku_count, 2);
    assert_eq!(rollup.on_hand, dec("8"));
    assert_eq!(rollup.reserved, dec("7"));
    assert_eq!(rollup.stock_value, dec("400.00"));
    assert_eq!(rollup.low_stock.len(), 1);
    assert_eq!(rollup.low_stock[0].item_id, b.id);

    let totals = aggregate_global(&[rollup]);
    assert_eq!(totals.low_stock_count, 1);
}

#[tokio::test]
async fn test_store_lines_scoped_to_one_store() {
    let pool = test_pool().await;

    let hq = store::create(
        &pool,
        StoreCreate {
            code: "HQ".to_string(),
            name: "Head Office".to_string(),
            city: None,
            state: None,
        },
    )
    .await
    .unwrap();
    let annex = store::create(
        &pool,
        StoreCreate {
            code: "ANNEX".to_string(),
            name: "Annex".to_string(),
            city: None,
            state: None,
        },
    )
    .await
    .unwrap();

    let beans = item::create(&pool, item_payload("SKU-1", "Beans", "50", true))
        .await
        .unwrap();

    for (store_id, quantity) in [(hq.id, "10"), (annex.id, "3")] {
        stock::adjust(
            &pool,
            &StockAdjust {
                store_id,
                item_id: beans.id,
                quantity: dec(quantity),
                reserved: None,
            },
        )
        .await
        .unwrap();
    }

    let lines = stock::find_lines_for_store(&pool, hq.id).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].store_id, hq.id);
    assert_eq!(lines[0].quantity, dec("10"));

    let rollup = aggregate_store(hq.id, &lines, dec("5"));
    assert_eq!(rollup.on_hand, dec("10"));
    assert_eq!(rollup.stock_value, dec("500.00"));
}

#[tokio::test]
async fn test_adjust_is_an_upsert_keeping_reserved() {
    let pool = test_pool().await;

    let shop = store::create(
        &pool,
        StoreCreate {
            code: "HQ".to_string(),
            name: "Head Office".to_string(),
            city: None,
            state: None,
        },
    )
    .await
    .unwrap();
    let beans = item::create(&pool, item_payload("SKU-1", "Beans", "10", true))
        .await
        .unwrap();

    stock::adjust(
        &pool,
        &StockAdjust {
            store_id: shop.id,
            item_id: beans.id,
            quantity: dec("10"),
            reserved: Some(dec("4")),
        },
    )
    .await
    .unwrap();

    // Second adjustment omits reserved: the level must carry over
    let record = stock::adjust(
        &pool,
        &StockAdjust {
            store_id: shop.id,
            item_id: beans.id,
            quantity: dec("6"),
            reserved: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(record.quantity, dec("6"));
    assert_eq!(record.reserved, dec("4"));
    assert_eq!(record.available(), dec("2"));
}
