//! End-to-end flow over the public API: register products, place orders.

use std::sync::Arc;

use chrono::Utc;

use cafekiosk_app::{
    OrderPlacement, PlaceOrder, ProductRegistrar, RegisterProduct, ServiceError,
};
use cafekiosk_catalog::{ProductType, SellingStatus};
use cafekiosk_store::{InMemoryOrderStore, InMemoryProductStore, OrderStore};

struct Backend {
    registrar: ProductRegistrar<Arc<InMemoryProductStore>>,
    placement: OrderPlacement<Arc<InMemoryProductStore>, Arc<InMemoryOrderStore>>,
    orders: Arc<InMemoryOrderStore>,
}

fn backend() -> Backend {
    let products = Arc::new(InMemoryProductStore::new());
    let orders = Arc::new(InMemoryOrderStore::new());
    Backend {
        registrar: ProductRegistrar::new(Arc::clone(&products)),
        placement: OrderPlacement::new(products, Arc::clone(&orders)),
        orders,
    }
}

fn register(backend: &Backend, name: &str, price: u64) {
    backend
        .registrar
        .register(RegisterProduct {
            product_type: ProductType::Handmade,
            selling_status: SellingStatus::Selling,
            name: name.to_string(),
            price,
        })
        .unwrap();
}

#[test]
fn register_then_order_round_trip() {
    let backend = backend();
    register(&backend, "americano", 1000);
    register(&backend, "latte", 3000);

    let at = Utc::now();
    let order = backend
        .placement
        .place(PlaceOrder {
            product_numbers: vec!["001".parse().unwrap(), "002".parse().unwrap()],
            ordered_at: at,
        })
        .unwrap();

    assert_eq!(order.total_price(), 4000);
    assert_eq!(order.registered_at(), at);

    let stored = backend.orders.get(order.id_typed()).unwrap().unwrap();
    assert_eq!(stored.total_price(), 4000);
    assert_eq!(stored.line_items().len(), 2);
}

#[test]
fn sequence_survives_multiple_registrations_and_orders() {
    let backend = backend();
    for i in 0..12 {
        register(&backend, &format!("menu item {i}"), 1000);
    }

    // 12 products registered: the next lookup key is "012".
    let order = backend
        .placement
        .place(PlaceOrder {
            product_numbers: vec!["012".parse().unwrap(), "012".parse().unwrap()],
            ordered_at: Utc::now(),
        })
        .unwrap();

    assert_eq!(order.total_price(), 2000);
    assert_eq!(backend.orders.all().unwrap().len(), 1);
}

#[test]
fn failed_order_leaves_the_order_log_untouched() {
    let backend = backend();
    register(&backend, "americano", 1000);

    let err = backend
        .placement
        .place(PlaceOrder {
            product_numbers: vec!["001".parse().unwrap(), "999".parse().unwrap()],
            ordered_at: Utc::now(),
        })
        .unwrap_err();

    assert!(matches!(err, ServiceError::UnknownProduct(_)));
    assert!(backend.orders.all().unwrap().is_empty());
}
