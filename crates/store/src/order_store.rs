//! Order store trait.

use std::sync::Arc;

use cafekiosk_core::OrderId;
use cafekiosk_ordering::Order;

use crate::error::StoreError;

/// Persistent order log.
pub trait OrderStore: Send + Sync {
    /// Persist a placed order (with its line items) as one unit.
    fn insert(&self, order: Order) -> Result<(), StoreError>;

    /// Look up an order by id.
    fn get(&self, id: OrderId) -> Result<Option<Order>, StoreError>;

    /// All stored orders, in insertion order.
    fn all(&self) -> Result<Vec<Order>, StoreError>;
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    fn insert(&self, order: Order) -> Result<(), StoreError> {
        (**self).insert(order)
    }

    fn get(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        (**self).get(id)
    }

    fn all(&self) -> Result<Vec<Order>, StoreError> {
        (**self).all()
    }
}
