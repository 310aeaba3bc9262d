use rust_decimal::Decimal;
use shop_hex::application::session::ShopSession;
use shop_storage::memory::InMemoryStore;
use shop_types::domain::config::{DeliveryConfig, PromotionConfig, ShopConfig};
use shop_types::domain::product::Product;
use shop_types::ports::key_value_store::KeyValueStore;
use std::sync::Arc;

fn config() -> Arc<ShopConfig> {
    Arc::new(ShopConfig {
        delivery_fee: DeliveryConfig {
            delivery_fee_amount: Decimal::from(50),
            minimum_cart_amount: Decimal::from(500),
        },
        promotion: PromotionConfig {
            discount_code: "SAVE10".into(),
            discount_amount: Decimal::from(10),
        },
    })
}

fn catalog() -> Vec<Product> {
    vec![
        Product {
            sku: 1,
            brand: "Nordic".into(),
            name: "Oat Milk".into(),
            pack_size: "1 L".into(),
            image_url: vec![],
            price: Decimal::new(4550, 2),
        },
        Product {
            sku: 2,
            brand: "Acme".into(),
            name: "Green Tea".into(),
            pack_size: "20 bags".into(),
            image_url: vec![],
            price: Decimal::from(120),
        },
    ]
}

// Browse, fill the cart, apply a code, check out, then read the order back.
#[tokio::test]
async fn browse_cart_checkout_flow() {
    let store = InMemoryStore::new();
    let mut session = ShopSession::new(catalog(), config(), store.clone());

    session.catalog.set_search_term("tea");
    let found: Vec<u64> = session.catalog.filtered_products().iter().map(|p| p.sku).collect();
    assert_eq!(found, vec![2]);
    session.catalog.reset_filters();

    session.add_sku(1).unwrap();
    session.add_sku(2).unwrap();
    session.add_sku(2).unwrap();
    session.cart.update_quantity(1, 2);
    assert_eq!(session.cart.total_quantity(), 4);
    assert_eq!(session.cart.subtotal(), Decimal::from(331));

    session.cart.set_promotion_code("save10");
    assert!(session.cart.apply_promotion());

    let order = session.checkout().await.unwrap();
    assert_eq!(order.sub_total, Decimal::from(331));
    assert_eq!(order.final_discount, Decimal::from(10));
    assert_eq!(order.delivery_fee, Decimal::from(50));
    assert_eq!(order.final_total_amount, Decimal::from(371));

    assert_eq!(session.cart.total_sku_count(), 0);
    assert_eq!(session.cart.final_discount(), Decimal::ZERO);

    let key = format!("order-{}", order.order_id);
    assert!(store.get(&key).await.unwrap().is_some());

    let fetched = session.archiver.get_order_by_id(&order.order_id).await;
    assert_eq!(fetched, Some(order.clone()));

    session
        .archiver
        .clear_order_from_storage(&order.order_id)
        .await
        .unwrap();
    assert!(session.archiver.get_order_by_id(&order.order_id).await.is_none());
}

#[tokio::test]
async fn consecutive_checkouts_get_distinct_ids() {
    let mut session = ShopSession::new(catalog(), config(), InMemoryStore::new());
    session.add_sku(1).unwrap();
    let first = session.checkout().await.unwrap();
    session.add_sku(2).unwrap();
    let second = session.checkout().await.unwrap();
    assert_ne!(first.order_id, second.order_id);
    assert!(session.archiver.get_order_by_id(&first.order_id).await.is_some());
    assert!(session.archiver.get_order_by_id(&second.order_id).await.is_some());
}
