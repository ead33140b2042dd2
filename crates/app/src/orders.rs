//! Order placement workflow.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cafekiosk_catalog::{Product, ProductNumber};
use cafekiosk_core::OrderId;
use cafekiosk_ordering::Order;
use cafekiosk_store::{OrderStore, ProductStore};

use crate::error::{ServiceError, ServiceResult};

/// Request: place an order for a list of product numbers.
///
/// The list is ordered and may repeat a number; each occurrence becomes its
/// own line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOrder {
    pub product_numbers: Vec<ProductNumber>,
    pub ordered_at: DateTime<Utc>,
}

/// Resolves requested product numbers against the catalog and persists the
/// resulting order.
#[derive(Debug)]
pub struct OrderPlacement<P, O> {
    products: P,
    orders: O,
}

impl<P, O> OrderPlacement<P, O>
where
    P: ProductStore,
    O: OrderStore,
{
    pub fn new(products: P, orders: O) -> Self {
        Self { products, orders }
    }

    /// Resolve, price, and persist one order.
    ///
    /// A requested number with no stored product rejects the whole order;
    /// nothing is persisted in that case.
    pub fn place(&self, request: PlaceOrder) -> ServiceResult<Order> {
        let resolved = self.resolve(&request.product_numbers)?;
        let order = Order::place(OrderId::new(), &resolved, request.ordered_at);

        self.orders.insert(order.clone())?;
        tracing::info!(
            order_id = %order.id_typed(),
            total_price = order.total_price(),
            line_items = order.line_items().len(),
            "order placed"
        );

        Ok(order)
    }

    /// Walk the requested list, duplicates included, through an index of the
    /// distinct lookup results — one resolved product per requested entry.
    fn resolve(&self, numbers: &[ProductNumber]) -> ServiceResult<Vec<Product>> {
        let found = self.products.find_by_numbers(numbers)?;
        let by_number: HashMap<&ProductNumber, &Product> =
            found.iter().map(|p| (p.number(), p)).collect();

        let mut resolved = Vec::with_capacity(numbers.len());
        for number in numbers {
            let product = by_number
                .get(number)
                .copied()
                .ok_or_else(|| ServiceError::UnknownProduct(number.clone()))?;
            resolved.push(product.clone());
        }
        Ok(resolved)
    }
}
