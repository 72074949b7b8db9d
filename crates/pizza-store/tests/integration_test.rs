use chrono::{Duration, Utc};
use pizza_store::catalog::Catalog;
use pizza_store::lifecycle::StoreSystem;
use pizza_store::model::{
    CartLine, CreateOrderRequest, GeoPosition, OrderPatch, OrderStatus,
};
use pizza_store::order_repository::OrderError;
use std::collections::HashSet;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn margherita_order(priority: bool) -> CreateOrderRequest {
    CreateOrderRequest {
        customer: Some("Grace".to_string()),
        phone: Some("+39 02 1234567".to_string()),
        address: Some("Via Roma 1, Milano".to_string()),
        cart: Some(vec![CartLine::new(1, "Margherita", 2, 12.0)]),
        priority: Some(priority),
        position: Some(GeoPosition {
            latitude: 45.4642,
            longitude: 9.19,
        }),
    }
}

/// A standard order end to end: priced, scheduled 45 minutes out, readable
/// back by id.
#[tokio::test]
async fn test_standard_order_is_priced_and_stored() {
    let system = StoreSystem::new(Catalog::pizzas(), 32);

    let before = Utc::now();
    let order = system
        .orders
        .create_order(margherita_order(false))
        .await
        .expect("Failed to create order");
    let after = Utc::now();

    assert_eq!(order.order_price, 24.0);
    assert_eq!(order.priority_price, 0.0);
    assert_eq!(order.total_price, 24.0);
    assert_eq!(order.status, OrderStatus::Preparing);
    assert!(order.created_at >= before && order.created_at <= after);
    assert_eq!(
        order.estimated_delivery,
        order.created_at + Duration::minutes(45)
    );

    let fetched = system
        .orders
        .get_order(&order.id.to_string())
        .await
        .expect("Failed to get order");
    assert_eq!(fetched, order);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_priority_order_pays_surcharge_and_arrives_sooner() {
    let system = StoreSystem::new(Catalog::pizzas(), 32);

    let order = system
        .orders
        .create_order(margherita_order(true))
        .await
        .expect("Failed to create order");

    assert_eq!(order.order_price, 24.0);
    assert!(approx(order.priority_price, 4.8));
    assert!(approx(order.total_price, 28.8));
    assert_eq!(
        order.estimated_delivery,
        order.created_at + Duration::minutes(30)
    );
}

#[tokio::test]
async fn test_identical_requests_get_distinct_ids() {
    let system = StoreSystem::new(Catalog::pizzas(), 32);

    let first = system
        .orders
        .create_order(margherita_order(false))
        .await
        .unwrap();
    let second = system
        .orders
        .create_order(margherita_order(false))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.customer, second.customer);
}

#[tokio::test]
async fn test_status_update_keeps_every_other_field() {
    let system = StoreSystem::new(Catalog::pizzas(), 32);
    let placed = system
        .orders
        .create_order(margherita_order(true))
        .await
        .unwrap();
    let id = placed.id.to_string();

    let ready = system
        .orders
        .update_order(&id, OrderPatch::status(OrderStatus::Ready))
        .await
        .expect("Failed to update order");

    assert_eq!(ready.status, OrderStatus::Ready);
    let mut expected = placed.clone();
    expected.status = OrderStatus::Ready;
    assert_eq!(ready, expected);

    // Any status may follow any other.
    let back = system
        .orders
        .update_order(&id, OrderPatch::status(OrderStatus::Preparing))
        .await
        .unwrap();
    assert_eq!(back.status, OrderStatus::Preparing);

    let stored = system.orders.get_order(&id).await.unwrap();
    assert_eq!(stored, back);
}

#[tokio::test]
async fn test_priority_change_does_not_reprice() {
    let system = StoreSystem::new(Catalog::pizzas(), 32);
    let placed = system
        .orders
        .create_order(margherita_order(false))
        .await
        .unwrap();

    let upgraded = system
        .orders
        .update_order(&placed.id.to_string(), OrderPatch::priority(true))
        .await
        .unwrap();

    assert!(upgraded.priority);
    assert_eq!(upgraded.priority_price, 0.0);
    assert_eq!(upgraded.total_price, 24.0);
    assert_eq!(upgraded.estimated_delivery, placed.estimated_delivery);
}

#[tokio::test]
async fn test_empty_patch_returns_order_unchanged() {
    let system = StoreSystem::new(Catalog::pizzas(), 32);
    let placed = system
        .orders
        .create_order(margherita_order(false))
        .await
        .unwrap();

    let same = system
        .orders
        .update_order(&placed.id.to_string(), OrderPatch::default())
        .await
        .unwrap();
    assert_eq!(same, placed);
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let system = StoreSystem::new(Catalog::pizzas(), 32);

    let result = system.orders.get_order("nonexistent-id").await;
    assert!(matches!(result, Err(OrderError::NotFound(_))));

    let unknown = uuid::Uuid::new_v4().to_string();
    let result = system.orders.get_order(&unknown).await;
    assert_eq!(result, Err(OrderError::NotFound(unknown.clone())));

    let result = system
        .orders
        .update_order(&unknown, OrderPatch::status(OrderStatus::Delivered))
        .await;
    assert!(matches!(result, Err(OrderError::NotFound(_))));
}

#[tokio::test]
async fn test_rejected_order_is_not_stored() {
    let system = StoreSystem::new(Catalog::pizzas(), 32);

    let mut incomplete = margherita_order(false);
    incomplete.address = None;
    let result = system.orders.create_order(incomplete).await;
    assert!(matches!(result, Err(OrderError::Validation(_))));
    assert_eq!(system.orders.order_count().await, Ok(0));

    let placed = system
        .orders
        .create_order(margherita_order(false))
        .await
        .unwrap();
    assert!(system.orders.get_order(&placed.id.to_string()).await.is_ok());
    assert_eq!(system.orders.order_count().await, Ok(1));
}

/// Many clients placing orders at once all get stored under distinct ids.
#[tokio::test]
async fn test_concurrent_orders_all_stored() {
    let system = StoreSystem::new(Catalog::pizzas(), 4);

    let mut handles = vec![];
    for i in 0..40 {
        let orders = system.orders.clone();
        handles.push(tokio::spawn(async move {
            orders.create_order(margherita_order(i % 2 == 0)).await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let order = handle.await.unwrap().expect("Failed to create order");
        ids.insert(order.id);
    }
    assert_eq!(ids.len(), 40);
    assert_eq!(system.orders.order_count().await, Ok(40));

    for id in &ids {
        assert!(system.orders.get_order(&id.to_string()).await.is_ok());
    }

    system.shutdown().await.unwrap();
}
