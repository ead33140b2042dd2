use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cafekiosk_catalog::{Product, ProductNumber};
use cafekiosk_core::{Entity, OrderId, ValueObject};

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Init,
    Canceled,
    PaymentCompleted,
    PaymentFailed,
    Received,
    Completed,
}

/// One resolved product within an order: its number and the price captured
/// at order time. The same product appears once per time it was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    number: ProductNumber,
    price: u64,
}

impl LineItem {
    pub fn new(number: ProductNumber, price: u64) -> Self {
        Self { number, price }
    }

    pub fn number(&self) -> &ProductNumber {
        &self.number
    }

    pub fn price(&self) -> u64 {
        self.price
    }
}

impl ValueObject for LineItem {}

/// A placed order. Immutable after placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    status: OrderStatus,
    registered_at: DateTime<Utc>,
    line_items: Vec<LineItem>,
    total_price: u64,
}

impl Order {
    /// Capture an order from resolved products.
    ///
    /// `products` is the resolved request list: one element per requested
    /// product number, duplicates included, in request order. The total is
    /// the sum over that list, so multiplicity directly drives pricing.
    pub fn place(id: OrderId, products: &[Product], registered_at: DateTime<Utc>) -> Self {
        let line_items: Vec<LineItem> = products
            .iter()
            .map(|p| LineItem::new(p.number().clone(), p.price()))
            .collect();
        let total_price = line_items.iter().map(LineItem::price).sum();

        Self {
            id,
            status: OrderStatus::Init,
            registered_at,
            line_items,
            total_price,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn total_price(&self) -> u64 {
        self.total_price
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
