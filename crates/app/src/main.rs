use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;

use cafekiosk_app::{OrderPlacement, PlaceOrder, ProductRegistrar, RegisterProduct};
use cafekiosk_catalog::{ProductType, SellingStatus};
use cafekiosk_store::{InMemoryOrderStore, InMemoryProductStore};

fn main() -> Result<()> {
    cafekiosk_observability::init();

    let products = Arc::new(InMemoryProductStore::new());
    let orders = Arc::new(InMemoryOrderStore::new());

    let registrar = ProductRegistrar::new(Arc::clone(&products));
    let placement = OrderPlacement::new(Arc::clone(&products), Arc::clone(&orders));

    for (product_type, name, price) in [
        (ProductType::Handmade, "americano", 4000),
        (ProductType::Handmade, "latte", 4500),
        (ProductType::Bakery, "croissant", 3500),
    ] {
        registrar.register(RegisterProduct {
            product_type,
            selling_status: SellingStatus::Selling,
            name: name.to_string(),
            price,
        })?;
    }

    let order = placement.place(PlaceOrder {
        product_numbers: vec!["001".parse()?, "001".parse()?, "003".parse()?],
        ordered_at: Utc::now(),
    })?;

    tracing::info!(
        order_id = %order.id_typed(),
        total_price = order.total_price(),
        "demo order complete"
    );

    Ok(())
}
